//! Storefront - the session context handed to every view.
//!
//! Owns the catalog, the cart and the checkout submitter, and is given the
//! order service to talk to. Views read through it and mutate the cart only
//! through its methods or the cart's own mutation methods.

use thiserror::Error;
use tracing::debug;

use crate::cart::{CartLine, CartStore};
use crate::catalog::{format_amount, Catalog, MenuItem};
use crate::checkout::{CheckoutError, CheckoutForm, CheckoutState, CheckoutSubmitter, Notice, ValidationErrors};
use crate::config::StorefrontConfig;
use crate::confirmation::{ConfirmationOutcome, FetchError, OrderConfirmationLoader};
use crate::order::{OrderId, OrderService};
use crate::route::Route;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("no menu item named {0}")]
    UnknownItem(String),
}

/// Where the checkout view goes after a submission, and what it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub notice: Option<Notice>,
    pub field_errors: Option<ValidationErrors>,
}

impl Navigation {
    fn to(route: Route) -> Self {
        Self {
            route,
            notice: None,
            field_errors: None,
        }
    }

    fn from_error(err: CheckoutError) -> Self {
        let route = match err {
            CheckoutError::EmptyCart => Route::Menu,
            _ => Route::Checkout,
        };
        Self {
            route,
            notice: err.notice(),
            field_errors: err.field_errors().cloned(),
        }
    }
}

pub struct Storefront<S> {
    catalog: Catalog,
    cart: CartStore,
    submitter: CheckoutSubmitter,
    service: S,
    currency_symbol: String,
}

impl<S: OrderService> Storefront<S> {
    /// Session with an empty cart and default settings.
    pub fn new(catalog: Catalog, service: S) -> Self {
        Self::with_config(catalog, service, &StorefrontConfig::default())
    }

    /// Session that formats amounts with the configured currency symbol.
    pub fn with_config(catalog: Catalog, service: S, config: &StorefrontConfig) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            submitter: CheckoutSubmitter::new(),
            service,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable cart access for quantity edits and the panel flag.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The injected order service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Where the last checkout attempt ended.
    pub fn checkout_state(&self) -> &CheckoutState {
        self.submitter.state()
    }

    /// Add one unit of the named catalog item.
    pub fn add_to_cart(&mut self, name: &str) -> Result<&CartLine, StorefrontError> {
        let item: &MenuItem = self
            .catalog
            .find(name)
            .ok_or_else(|| StorefrontError::UnknownItem(name.to_string()))?;
        self.cart.add_item(item);
        self.cart
            .line(name)
            .ok_or_else(|| StorefrontError::UnknownItem(name.to_string()))
    }

    /// Render an amount with the configured currency symbol.
    pub fn format_amount(&self, amount: u64) -> String {
        format_amount(&self.currency_symbol, amount)
    }

    /// Cart badge text, e.g. `3 items · ₹180`.
    pub fn cart_summary(&self) -> String {
        let count = self.cart.total_items();
        let noun = if count == 1 { "item" } else { "items" };
        format!("{} {} · {}", count, noun, self.format_amount(self.cart.total_amount()))
    }

    /// Submit the checkout form and decide where the customer goes next.
    pub async fn checkout(&mut self, form: &CheckoutForm) -> Navigation {
        match self.submitter.submit(&mut self.cart, form, &self.service).await {
            Ok(order_id) => {
                self.cart.set_cart_open(false);
                let navigation = Navigation::to(Route::Confirmation(order_id));
                debug!(route = %navigation.route, "checkout complete");
                navigation
            }
            Err(err) => Navigation::from_error(err),
        }
    }

    /// Load an order for the confirmation view.
    pub async fn confirmation(&self, order_id: &OrderId) -> Result<ConfirmationOutcome, FetchError> {
        OrderConfirmationLoader::new(&self.service).load(order_id).await
    }
}

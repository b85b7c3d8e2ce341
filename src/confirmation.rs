//! Order confirmation - reads a placed order back for display.

use thiserror::Error;
use tracing::{error, info};

use crate::order::{Order, OrderId, OrderItem, OrderService, OrderServiceError};
use crate::route::Route;

/// Loading the confirmation view failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to load order {order_id}: {source}")]
    Order {
        order_id: OrderId,
        #[source]
        source: OrderServiceError,
    },
    #[error("failed to load items of order {order_id}: {source}")]
    Items {
        order_id: OrderId,
        #[source]
        source: OrderServiceError,
    },
}

/// A loaded order and its lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl OrderConfirmation {
    /// Short reference shown to the customer: first 8 id characters, upper-cased.
    pub fn display_number(&self) -> String {
        self.order
            .id
            .as_str()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }

    /// Status with its first letter capitalized (`pending` → `Pending`).
    pub fn status_label(&self) -> String {
        let mut chars = self.order.status.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Sum of the persisted item subtotals, saturating at `u64::MAX`.
    pub fn items_total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.subtotal))
    }
}

/// What the confirmation view should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Loaded(OrderConfirmation),
    /// The order does not exist; send the customer elsewhere.
    Redirect(Route),
}

/// Fetches an order header and then its items.
pub struct OrderConfirmationLoader<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: OrderService + ?Sized> OrderConfirmationLoader<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Fetch the header, then its items. A missing header is a redirect, not an error.
    pub async fn load(&self, order_id: &OrderId) -> Result<ConfirmationOutcome, FetchError> {
        let order = match self.service.get_order(order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                info!(order_id = %order_id, "order not found, redirecting home");
                return Ok(ConfirmationOutcome::Redirect(Route::Home));
            }
            Err(source) => {
                error!(order_id = %order_id, error = %source, "error fetching order");
                return Err(FetchError::Order {
                    order_id: order_id.clone(),
                    source,
                });
            }
        };

        let items = self
            .service
            .get_order_items(order_id)
            .await
            .map_err(|source| {
                error!(order_id = %order_id, error = %source, "error fetching order items");
                FetchError::Items {
                    order_id: order_id.clone(),
                    source,
                }
            })?;

        Ok(ConfirmationOutcome::Loaded(OrderConfirmation { order, items }))
    }
}

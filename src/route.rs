use std::fmt;

use crate::order::OrderId;

/// Storefront views the core can send the customer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Menu,
    Checkout,
    Confirmation(OrderId),
}

impl Route {
    /// URL path for this view.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Menu => "/menu".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::Confirmation(id) => format!("/order-confirmation/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

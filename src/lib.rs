//! Café storefront core.
//!
//! A static [`Catalog`], a session [`CartStore`] with derived totals, a
//! [`CheckoutSubmitter`] that validates a [`CheckoutForm`] and persists the
//! order header and its items through an [`OrderService`], and an
//! [`OrderConfirmationLoader`] that reads placed orders back.
//!
//! ```
//! use cafe_storefront::{Catalog, CheckoutForm, InMemoryOrderService, OrderType, Route, Storefront};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = Storefront::new(Catalog::house_menu(), InMemoryOrderService::new());
//! store.add_to_cart("Latte")?;
//! store.add_to_cart("Latte")?;
//!
//! let form = CheckoutForm::new("Asha Rao", "asha@example.com", "9876543210", OrderType::Pickup);
//! let next = store.checkout(&form).await;
//! assert!(matches!(next.route, Route::Confirmation(_)));
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod confirmation;
pub mod order;
mod route;
mod storefront;

pub use cart::{CartLine, CartStore, MAX_LINE_QUANTITY};
pub use catalog::{format_amount, Catalog, CatalogError, Category, MenuItem};
pub use checkout::{
    CheckoutError, CheckoutForm, CheckoutState, CheckoutSubmitter, Field, FieldError, Notice,
    OrderType, ValidationErrors,
};
pub use config::{ConfigError, StorefrontConfig};
pub use confirmation::{ConfirmationOutcome, FetchError, OrderConfirmation, OrderConfirmationLoader};
pub use order::{
    InMemoryOrderService, NewOrder, NewOrderItem, Order, OrderId, OrderItem, OrderService,
    OrderServiceError,
};
pub use route::Route;
pub use storefront::{Navigation, Storefront, StorefrontError};

#[cfg(feature = "rest")]
pub use order::RestOrderService;

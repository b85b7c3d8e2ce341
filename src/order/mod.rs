//! Orders - persisted records and the service that stores them.
//!
//! The order store is an external collaborator reached through the
//! [`OrderService`] trait. Two implementations ship with the crate:
//!
//! - [`InMemoryOrderService`] for tests and local runs.
//! - `RestOrderService` (feature `rest`) for the hosted backend.

mod in_memory;
mod record;
mod service;

#[cfg(feature = "rest")]
mod rest;

pub use in_memory::InMemoryOrderService;
pub use record::{NewOrder, NewOrderItem, Order, OrderId, OrderItem, STATUS_PENDING};
pub use service::{OrderService, OrderServiceError};

#[cfg(feature = "rest")]
pub use rest::RestOrderService;

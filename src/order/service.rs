use async_trait::async_trait;
use thiserror::Error;

use super::{NewOrder, NewOrderItem, Order, OrderId, OrderItem};

/// Errors surfaced by an [`OrderService`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderServiceError {
    /// The request never produced a response (connection, timeout, ...).
    #[error("order service unreachable: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("order service returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("order service response decode failed: {0}")]
    Decode(String),
    /// A record with the same key already exists.
    #[error("{collection}:{id} already exists")]
    Conflict { collection: String, id: String },
    /// The store itself failed (poisoned lock, injected failure, ...).
    #[error("order storage error: {0}")]
    Storage(String),
}

impl OrderServiceError {
    /// HTTP-style classification of the failure.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderServiceError::Transport(_) => 503,
            OrderServiceError::Status { status, .. } => *status,
            OrderServiceError::Decode(_) => 502,
            OrderServiceError::Conflict { .. } => 409,
            OrderServiceError::Storage(_) => 500,
        }
    }
}

impl From<serde_json::Error> for OrderServiceError {
    fn from(err: serde_json::Error) -> Self {
        OrderServiceError::Decode(err.to_string())
    }
}

/// The hosted order store, as seen by checkout and confirmation.
///
/// Items reference their header's generated id, so callers must create the
/// header first and only then its items.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Persist an order header and return it with its generated id.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderServiceError>;

    /// Persist the line items of an existing order.
    async fn create_order_items(
        &self,
        order_id: &OrderId,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrderServiceError>;

    /// Fetch a header. `None` when no such order exists.
    async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError>;

    /// Fetch all items of an order, in a stable order.
    async fn get_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderServiceError>;

    /// Delete a header and any items under it. Returns true if it existed.
    async fn delete_order(&self, id: &OrderId) -> Result<bool, OrderServiceError>;
}

#[async_trait]
impl<S: OrderService + ?Sized> OrderService for std::sync::Arc<S> {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderServiceError> {
        (**self).create_order(order).await
    }

    async fn create_order_items(
        &self,
        order_id: &OrderId,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrderServiceError> {
        (**self).create_order_items(order_id, items).await
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError> {
        (**self).get_order(id).await
    }

    async fn get_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderServiceError> {
        (**self).get_order_items(order_id).await
    }

    async fn delete_order(&self, id: &OrderId) -> Result<bool, OrderServiceError> {
        (**self).delete_order(id).await
    }
}

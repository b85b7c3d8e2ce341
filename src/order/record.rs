use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLine;
use crate::catalog::Category;
use crate::checkout::OrderType;

/// Status the backend assigns to freshly created orders.
pub const STATUS_PENDING: &str = "pending";

/// Backend-generated order identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random (v4 UUID) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Order header payload sent on creation. The backend fills in `id`,
/// `status` and `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub total_amount: u64,
    pub special_instructions: Option<String>,
}

/// A persisted order header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub total_amount: u64,
    pub special_instructions: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a header the way the backend does on insert.
    pub fn from_new(id: OrderId, order: NewOrder, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            order_type: order.order_type,
            total_amount: order.total_amount,
            special_instructions: order.special_instructions,
            status: STATUS_PENDING.to_string(),
            created_at,
        }
    }
}

/// Line item payload, snapshotting price and quantity at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub item_name: String,
    pub item_category: Category,
    pub quantity: u32,
    pub unit_price: u32,
    pub subtotal: u64,
}

impl NewOrderItem {
    /// Snapshot a cart line; the subtotal is fixed at this point.
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            item_name: line.item.name.clone(),
            item_category: line.item.category,
            quantity: line.quantity,
            unit_price: line.unit_price(),
            subtotal: line.subtotal(),
        }
    }
}

/// A persisted order line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: OrderId,
    pub item_name: String,
    pub item_category: Category,
    pub quantity: u32,
    pub unit_price: u32,
    pub subtotal: u64,
}

impl OrderItem {
    /// Attach the stored id and owning order to a new item.
    pub fn from_new(id: impl Into<String>, order_id: OrderId, item: NewOrderItem) -> Self {
        Self {
            id: id.into(),
            order_id,
            item_name: item.item_name,
            item_category: item.item_category,
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: item.subtotal,
        }
    }
}

//! InMemoryOrderService - HashMap-backed order store for tests and demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{NewOrder, NewOrderItem, Order, OrderId, OrderItem, OrderService, OrderServiceError};

/// A row type kept in its own collection ("orders", "order_items").
trait Record: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;

    fn key(&self) -> &str;
}

impl Record for Order {
    const COLLECTION: &'static str = "orders";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for OrderItem {
    const COLLECTION: &'static str = "order_items";

    fn key(&self) -> &str {
        &self.id
    }
}

struct StoredRecord {
    bytes: Vec<u8>,
    seq: u64,
}

/// In-memory order service.
///
/// Rows are stored as JSON under `"COLLECTION:id"` so they go through the same
/// serde path as the hosted backend. Clone-friendly via Arc; clones share
/// storage.
#[derive(Clone)]
pub struct InMemoryOrderService {
    storage: Arc<RwLock<HashMap<String, StoredRecord>>>,
    seq: Arc<AtomicU64>,
}

impl Default for InMemoryOrderService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryOrderService {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            seq: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Every stored order header, oldest first.
    pub fn orders(&self) -> Result<Vec<Order>, OrderServiceError> {
        self.find::<Order>(&|_| true)
    }

    /// Every stored order item, oldest first.
    pub fn order_items(&self) -> Result<Vec<OrderItem>, OrderServiceError> {
        self.find::<OrderItem>(&|_| true)
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn insert<M: Record>(&self, record: &M) -> Result<(), OrderServiceError> {
        let key = Self::make_key(M::COLLECTION, record.key());
        let bytes = serde_json::to_vec(record)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| OrderServiceError::Storage("lock poisoned".into()))?;

        if storage.contains_key(&key) {
            return Err(OrderServiceError::Conflict {
                collection: M::COLLECTION.to_string(),
                id: record.key().to_string(),
            });
        }

        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        storage.insert(key, StoredRecord { bytes, seq });
        Ok(())
    }

    fn get<M: Record>(&self, id: &str) -> Result<Option<M>, OrderServiceError> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self
            .storage
            .read()
            .map_err(|_| OrderServiceError::Storage("lock poisoned".into()))?;

        match storage.get(&key) {
            Some(stored) => Ok(Some(serde_json::from_slice(&stored.bytes)?)),
            None => Ok(None),
        }
    }

    fn find<M: Record>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, OrderServiceError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| OrderServiceError::Storage("lock poisoned".into()))?;

        let prefix = format!("{}:", M::COLLECTION);
        let mut results = Vec::new();

        for (key, stored) in storage.iter() {
            if key.starts_with(&prefix) {
                let data: M = serde_json::from_slice(&stored.bytes)?;
                if predicate(&data) {
                    results.push((stored.seq, data));
                }
            }
        }

        results.sort_by_key(|(seq, _)| *seq);
        Ok(results.into_iter().map(|(_, data)| data).collect())
    }

    fn delete_where<M: Record>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<usize, OrderServiceError> {
        let doomed: Vec<String> = self
            .find::<M>(predicate)?
            .iter()
            .map(|record| Self::make_key(M::COLLECTION, record.key()))
            .collect();

        let mut storage = self
            .storage
            .write()
            .map_err(|_| OrderServiceError::Storage("lock poisoned".into()))?;

        Ok(doomed
            .iter()
            .filter(|key| storage.remove(key.as_str()).is_some())
            .count())
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderServiceError> {
        let order = Order::from_new(OrderId::generate(), order, Utc::now());
        self.insert(&order)?;
        debug!(order_id = %order.id, total = order.total_amount, "order stored");
        Ok(order)
    }

    async fn create_order_items(
        &self,
        order_id: &OrderId,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrderServiceError> {
        let rows: Vec<OrderItem> = items
            .into_iter()
            .map(|item| OrderItem::from_new(Uuid::new_v4().to_string(), order_id.clone(), item))
            .collect();
        for row in &rows {
            self.insert(row)?;
        }
        debug!(order_id = %order_id, count = rows.len(), "order items stored");
        Ok(rows)
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError> {
        self.get::<Order>(id.as_str())
    }

    async fn get_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderServiceError> {
        self.find::<OrderItem>(&|item| &item.order_id == order_id)
    }

    async fn delete_order(&self, id: &OrderId) -> Result<bool, OrderServiceError> {
        self.delete_where::<OrderItem>(&|item| &item.order_id == id)?;
        let removed = self.delete_where::<Order>(&|order| &order.id == id)?;
        Ok(removed > 0)
    }
}

//! REST client for a PostgREST-style hosted backend.
//!
//! Requires the `rest` feature. Talks to two tables:
//!
//! - `POST   {base}/rest/v1/orders`                      insert a header
//! - `GET    {base}/rest/v1/orders?id=eq.{id}`           read a header
//! - `DELETE {base}/rest/v1/orders?id=eq.{id}`           delete a header
//! - `POST   {base}/rest/v1/order_items`                 insert items
//! - `GET    {base}/rest/v1/order_items?order_id=eq.{id}` read items
//! - `DELETE {base}/rest/v1/order_items?order_id=eq.{id}` delete items
//!
//! Every request carries the project key as both `apikey` and a bearer token.
//! Writes ask for `Prefer: return=representation` so the inserted rows come
//! back with their generated columns.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{NewOrder, NewOrderItem, Order, OrderId, OrderItem, OrderService, OrderServiceError};
use crate::config::{ConfigError, StorefrontConfig};

const ORDERS: &str = "orders";
const ORDER_ITEMS: &str = "order_items";

/// An item row as inserted: the payload plus its parent id.
#[derive(Serialize)]
struct OrderItemRow<'a> {
    order_id: &'a OrderId,
    #[serde(flatten)]
    item: &'a NewOrderItem,
}

/// Order service backed by the hosted REST API.
#[derive(Clone)]
pub struct RestOrderService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestOrderService {
    /// Client for `base_url` using a fresh `reqwest::Client`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Client sharing an existing `reqwest::Client` (connection pool, timeouts).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Build from configuration; both the URL and the key must be set.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, ConfigError> {
        let url = config
            .order_service_url
            .as_deref()
            .ok_or(ConfigError::Missing("CAFE_ORDER_SERVICE_URL"))?;
        let key = config
            .order_service_key
            .as_deref()
            .ok_or(ConfigError::Missing("CAFE_ORDER_SERVICE_KEY"))?;
        Ok(Self::new(url, key))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<Vec<T>, OrderServiceError> {
        let request = self
            .authorize(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(body);
        read_rows(send(request).await?).await
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Vec<T>, OrderServiceError> {
        let filter = format!("eq.{}", value);
        let request = self
            .authorize(self.client.get(self.table_url(table)))
            .query(&[(column, filter.as_str()), ("select", "*")]);
        read_rows(send(request).await?).await
    }
}

async fn send(request: RequestBuilder) -> Result<Response, OrderServiceError> {
    let response = request
        .send()
        .await
        .map_err(|e| OrderServiceError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), %body, "order service request rejected");
    Err(OrderServiceError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, OrderServiceError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| OrderServiceError::Transport(e.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl OrderService for RestOrderService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderServiceError> {
        let rows: Vec<Order> = self.insert(ORDERS, &order).await?;
        let created = rows
            .into_iter()
            .next()
            .ok_or_else(|| OrderServiceError::Decode("insert returned no order row".into()))?;
        debug!(order_id = %created.id, "order created");
        Ok(created)
    }

    async fn create_order_items(
        &self,
        order_id: &OrderId,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrderServiceError> {
        let rows: Vec<OrderItemRow<'_>> = items
            .iter()
            .map(|item| OrderItemRow { order_id, item })
            .collect();
        let created: Vec<OrderItem> = self.insert(ORDER_ITEMS, rows.as_slice()).await?;
        debug!(order_id = %order_id, count = created.len(), "order items created");
        Ok(created)
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError> {
        let rows: Vec<Order> = self.select(ORDERS, "id", id.as_str()).await?;
        Ok(rows.into_iter().next())
    }

    async fn get_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderServiceError> {
        self.select(ORDER_ITEMS, "order_id", order_id.as_str()).await
    }

    async fn delete_order(&self, id: &OrderId) -> Result<bool, OrderServiceError> {
        let filter = format!("eq.{}", id);
        // Items before the header; no database cascade is assumed.
        let items = self
            .authorize(self.client.delete(self.table_url(ORDER_ITEMS)))
            .query(&[("order_id", filter.as_str())]);
        send(items).await?;

        let request = self
            .authorize(self.client.delete(self.table_url(ORDERS)))
            .header("Prefer", "return=representation")
            .query(&[("id", filter.as_str())]);
        let rows: Vec<Order> = read_rows(send(request).await?).await?;
        Ok(!rows.is_empty())
    }
}

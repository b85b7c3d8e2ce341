//! A tiny in-process stand-in for the hosted `orders` / `order_items` tables.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-anon-key";

#[derive(Default)]
pub struct Tables {
    pub orders: Vec<Value>,
    pub order_items: Vec<Value>,
    pub fail_items: bool,
    next_id: u64,
}

impl Tables {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{:04}", prefix, self.next_id)
    }
}

pub type Db = Arc<Mutex<Tables>>;

/// Bind to port 0 and return the base URL plus a handle on the tables.
pub async fn start() -> (String, Db) {
    let db: Db = Arc::new(Mutex::new(Tables::default()));
    let app = Router::new()
        .route(
            "/rest/v1/orders",
            post(insert_order).get(select_orders).delete(delete_orders),
        )
        .route(
            "/rest/v1/order_items",
            post(insert_items).get(select_items).delete(delete_items),
        )
        .with_state(db.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), db)
}

fn authorized(headers: &HeaderMap) -> bool {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    apikey == Some(API_KEY) && bearer == Some(format!("Bearer {API_KEY}").as_str())
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "invalid api key" }))).into_response()
}

/// Match a PostgREST `eq.` filter against a row column.
fn matches(row: &Value, params: &HashMap<String, String>, column: &str) -> bool {
    match params.get(column).and_then(|f| f.strip_prefix("eq.")) {
        Some(wanted) => row[column].as_str() == Some(wanted),
        None => true,
    }
}

async fn insert_order(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(mut row): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut tables = db.lock().unwrap();
    let id = tables.next_id("order");
    row["id"] = json!(id);
    row["status"] = json!("pending");
    row["created_at"] = json!("2026-10-17T09:30:00Z");
    tables.orders.push(row.clone());
    (StatusCode::CREATED, Json(json!([row]))).into_response()
}

async fn select_orders(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let tables = db.lock().unwrap();
    let rows: Vec<&Value> = tables
        .orders
        .iter()
        .filter(|row| matches(row, &params, "id"))
        .collect();
    Json(json!(rows)).into_response()
}

async fn delete_orders(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut tables = db.lock().unwrap();
    let (removed, kept): (Vec<Value>, Vec<Value>) = tables
        .orders
        .drain(..)
        .partition(|row| matches(row, &params, "id"));
    tables.orders = kept;
    Json(json!(removed)).into_response()
}

async fn insert_items(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(rows): Json<Vec<Value>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut tables = db.lock().unwrap();
    if tables.fail_items {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "order_items insert failed" })),
        )
            .into_response();
    }
    let mut created = Vec::with_capacity(rows.len());
    for mut row in rows {
        row["id"] = json!(tables.next_id("item"));
        tables.order_items.push(row.clone());
        created.push(row);
    }
    (StatusCode::CREATED, Json(json!(created))).into_response()
}

async fn select_items(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let tables = db.lock().unwrap();
    let rows: Vec<&Value> = tables
        .order_items
        .iter()
        .filter(|row| matches(row, &params, "order_id"))
        .collect();
    Json(json!(rows)).into_response()
}

async fn delete_items(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut tables = db.lock().unwrap();
    tables
        .order_items
        .retain(|row| !matches(row, &params, "order_id"));
    StatusCode::NO_CONTENT.into_response()
}

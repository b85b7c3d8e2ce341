//! REST order service integration tests.
//!
//! Starts a fake PostgREST-style backend with axum and drives
//! `RestOrderService` against it with reqwest.

mod backend;
mod order_service;

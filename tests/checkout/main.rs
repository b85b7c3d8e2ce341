//! Checkout integration tests.
//!
//! Drives the submitter and the storefront against an order service that can
//! be told to fail individual calls.

mod support;

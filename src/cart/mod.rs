//! Cart - the in-memory selection for the current session.
//!
//! Lines are keyed by menu item name. The store is an explicitly owned value;
//! whoever needs the cart is handed a reference to it.

mod line;
mod store;

pub use line::CartLine;
pub use store::{CartStore, MAX_LINE_QUANTITY};

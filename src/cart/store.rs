use tracing::debug;

use super::CartLine;
use crate::catalog::MenuItem;

/// Largest quantity a single line can hold. Larger requests are capped.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// The session cart: lines in insertion order plus the cart-panel flag.
///
/// The mutation methods are the only write path. Totals are derived from the
/// lines on every read and never cached.
#[derive(Clone, Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    open: bool,
}

impl CartStore {
    /// An empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`, appending a new line if it is not in the cart yet.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.position(&item.name) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
                debug!(item = %item.name, quantity = line.quantity, "cart item incremented");
            }
            None => {
                self.lines.push(CartLine::new(item.clone()));
                debug!(item = %item.name, "cart item added");
            }
        }
    }

    /// Drop the line for `name`, if any.
    pub fn remove_item(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            self.lines.remove(index);
            debug!(item = %name, "cart item removed");
        }
    }

    /// Set a line's quantity to exactly `quantity`. Zero or less removes the line;
    /// anything above [`MAX_LINE_QUANTITY`] is capped to it.
    pub fn update_quantity(&mut self, name: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(name);
            return;
        }
        if let Some(index) = self.position(name) {
            let quantity = u32::try_from(quantity)
                .unwrap_or(u32::MAX)
                .min(MAX_LINE_QUANTITY);
            self.lines[index].quantity = quantity;
            debug!(item = %name, quantity, "cart quantity updated");
        }
    }

    /// One more unit of an item already in the cart.
    pub fn increment(&mut self, name: &str) {
        let quantity = self.quantity_of(name);
        if quantity > 0 {
            self.update_quantity(name, i64::from(quantity) + 1);
        }
    }

    /// One fewer unit; the line goes away when it reaches zero.
    pub fn decrement(&mut self, name: &str) {
        let quantity = self.quantity_of(name);
        if quantity > 0 {
            self.update_quantity(name, i64::from(quantity) - 1);
        }
    }

    /// Remove every line. The panel flag is left alone.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        debug!("cart cleared");
    }

    /// Open or close the cart panel.
    pub fn set_cart_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn is_cart_open(&self) -> bool {
        self.open
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `name`, if present.
    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name() == name)
    }

    /// Quantity of `name` in the cart, 0 when absent.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.line(name).map(|line| line.quantity).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, line| total.saturating_add(u64::from(line.quantity)))
    }

    /// Sum of `price_value × quantity` across all lines, saturating at `u64::MAX`.
    pub fn total_amount(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.subtotal()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name() == name)
    }
}

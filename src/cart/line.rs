use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;

/// One catalog item plus the quantity selected. Quantity is always >= 1;
/// a line that would drop to zero is removed by the store instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub(super) fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn unit_price(&self) -> u32 {
        self.item.price_value
    }

    /// `price_value × quantity`, computed on every call.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.item.price_value) * u64::from(self.quantity)
    }
}

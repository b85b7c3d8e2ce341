use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Menu section an item is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hot,
    Cold,
    Snacks,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 3] = [Category::Hot, Category::Cold, Category::Snacks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hot => "hot",
            Category::Cold => "cold",
            Category::Snacks => "snacks",
        }
    }

    /// Heading shown on the menu tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hot => "Hot Beverages",
            Category::Cold => "Cold Beverages",
            Category::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(Category::Hot),
            "cold" => Ok(Category::Cold),
            "snacks" => Ok(Category::Snacks),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// An immutable catalog entry. The `name` doubles as the item's identity in
/// the cart, so it must be unique across the whole catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Display price, e.g. `₹70`.
    pub price: String,
    /// Numeric price in whole currency units.
    pub price_value: u32,
    pub image: String,
    pub category: Category,
}

impl MenuItem {
    /// Build an item whose display price is derived from `price_value`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price_value: u32,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: format_amount(DEFAULT_CURRENCY_SYMBOL, u64::from(price_value)),
            price_value,
            image: image.into(),
            category,
        }
    }
}

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Render an amount with its currency symbol (`₹180`).
pub fn format_amount(symbol: &str, amount: u64) -> String {
    format!("{}{}", symbol, amount)
}

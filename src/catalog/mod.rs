//! Catalog - the static, read-only menu.
//!
//! Items are grouped by [`Category`] and looked up by name. The catalog is
//! built once at startup (from the built-in house menu or a JSON file) and is
//! never mutated afterwards.
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "hot": [
//!     { "name": "Latte", "description": "...", "price": "₹70",
//!       "priceValue": 70, "image": "/images/latte.jpg", "category": "hot" }
//!   ],
//!   "cold": [],
//!   "snacks": []
//! }
//! ```

mod house_menu;
mod item;

use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;

pub use item::{format_amount, Category, MenuItem, DEFAULT_CURRENCY_SYMBOL};

/// Errors raised while building a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share a name; they would collide in the cart.
    #[error("duplicate menu item name: {0}")]
    DuplicateItem(String),
    /// An item is listed under a section that differs from its own category.
    #[error("menu item {name} is listed under {section} but has category {category}")]
    CategoryMismatch {
        name: String,
        section: Category,
        category: Category,
    },
    #[error("menu item {0} has no display price")]
    MissingPrice(String),
    #[error("unknown menu category: {0}")]
    UnknownCategory(String),
    #[error("catalog decode failed: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// The fixed set of purchasable items, grouped by category.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    sections: BTreeMap<Category, Vec<MenuItem>>,
    index: HashMap<String, (Category, usize)>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and blank display prices.
    ///
    /// Items keep their relative order within each category.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.price.trim().is_empty() {
                return Err(CatalogError::MissingPrice(item.name.clone()));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self::build(items))
    }

    /// Load a category → items mapping.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let sections: BTreeMap<Category, Vec<MenuItem>> = serde_json::from_str(json)?;
        let mut items = Vec::new();
        for (section, entries) in sections {
            for item in entries {
                if item.category != section {
                    return Err(CatalogError::CategoryMismatch {
                        name: item.name,
                        section,
                        category: item.category,
                    });
                }
                items.push(item);
            }
        }
        Self::new(items)
    }

    /// The café's built-in menu.
    pub fn house_menu() -> Self {
        Self::build(house_menu::items())
    }

    fn build(items: Vec<MenuItem>) -> Self {
        let mut sections: BTreeMap<Category, Vec<MenuItem>> = BTreeMap::new();
        let mut index = HashMap::with_capacity(items.len());
        for item in items {
            let section = sections.entry(item.category).or_default();
            index.insert(item.name.clone(), (item.category, section.len()));
            section.push(item);
        }
        Self { sections, index }
    }

    /// Categories in menu order, including empty ones.
    pub fn categories(&self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter()
    }

    /// Items in a category, in listing order.
    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look an item up by its exact name.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        let (category, position) = self.index.get(name)?;
        self.sections.get(category)?.get(*position)
    }

    /// All items, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Serialize as a category → items mapping, the shape `from_json` reads.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.sections)?)
    }
}

//! Runtime configuration, read from the environment.
//!
//! | Variable                 | Meaning                                  | Default      |
//! |--------------------------|------------------------------------------|--------------|
//! | `CAFE_ORDER_SERVICE_URL` | Base URL of the hosted order backend     | unset        |
//! | `CAFE_ORDER_SERVICE_KEY` | API key sent to the backend              | unset        |
//! | `CAFE_CATALOG_PATH`      | JSON menu file replacing the house menu  | unset        |
//! | `CAFE_CURRENCY_SYMBOL`   | Symbol used when rendering amounts       | `₹`          |

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogError, DEFAULT_CURRENCY_SYMBOL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub order_service_url: Option<String>,
    pub order_service_key: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub currency_symbol: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            order_service_url: None,
            order_service_key: None,
            catalog_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key → value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            let value = lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            if value.is_none() {
                info!("{key} not set");
            }
            value
        };

        let order_service_url = var("CAFE_ORDER_SERVICE_URL");
        let order_service_key = var("CAFE_ORDER_SERVICE_KEY");
        if order_service_url.is_some() && order_service_key.is_none() {
            warn!("CAFE_ORDER_SERVICE_URL is set without CAFE_ORDER_SERVICE_KEY");
        }

        Self {
            order_service_url,
            order_service_key,
            catalog_path: var("CAFE_CATALOG_PATH").map(PathBuf::from),
            currency_symbol: var("CAFE_CURRENCY_SYMBOL").unwrap_or_else(|| {
                info!("using default currency symbol {DEFAULT_CURRENCY_SYMBOL}");
                DEFAULT_CURRENCY_SYMBOL.to_string()
            }),
        }
    }

    /// The configured menu file, or the house menu when none is set.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::house_menu());
        };
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&json)?;
        info!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

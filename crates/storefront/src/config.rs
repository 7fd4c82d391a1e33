//! Page context loaded from embedded JSON.
//!
//! The host page carries a JSON context blob describing the product on
//! display and a few engine knobs. This is the storefront's configuration
//! surface; there are no environment variables in the engine itself (the
//! CLI layers those on top).
//!
//! # Fields
//!
//! ## Product page
//! - `product.id` - catalog ID of the displayed product
//! - `product.name` - display name
//! - `product.price` - unit price with currency
//! - `product.max_quantity` - advertised per-product quantity cap (>= 1)
//! - `product.images` - gallery image URLs, main image first (non-empty)
//! - `storage_key` - cart storage key (default: `cart`)
//!
//! ## Site
//! - `menu_breakpoint` - viewport width above which the mobile menu closes
//!   (default: 768)
//! - `submit_delay_ms` - simulated submission round-trip (default: 1000)

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use atelier_core::{CurrencyCode, Price, ProductId};

/// Default cart storage key.
const DEFAULT_STORAGE_KEY: &str = "cart";

/// Default mobile menu breakpoint in pixels.
const DEFAULT_MENU_BREAKPOINT: f64 = 768.0;

/// Default simulated submission delay in milliseconds.
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed page context: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid page context field {0}: {1}")]
    Invalid(&'static str, String),
}

/// Product page context.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// The product this page sells.
    pub product: ProductConfig,
    /// Storage key the cart persists under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// The single product a page is built around.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductConfig {
    /// Catalog ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Advertised per-product quantity cap.
    pub max_quantity: u32,
    /// Gallery image URLs, main image first.
    pub images: Vec<Url>,
}

/// Site-wide context.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Viewport width in pixels above which the mobile menu closes.
    #[serde(default = "default_menu_breakpoint")]
    pub menu_breakpoint: f64,
    /// Simulated submission round-trip in milliseconds.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl PageConfig {
    /// Load a page context from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed or a field fails
    /// validation (`max_quantity` of zero, no images, empty name).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The currency the page trades in (taken from the product price).
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.product.price.currency()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.product.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "product.name",
                "must not be empty".to_owned(),
            ));
        }
        if self.product.max_quantity == 0 {
            return Err(ConfigError::Invalid(
                "product.max_quantity",
                "must be at least 1".to_owned(),
            ));
        }
        if self.product.images.is_empty() {
            return Err(ConfigError::Invalid(
                "product.images",
                "must contain at least one image".to_owned(),
            ));
        }
        Ok(())
    }
}

impl SiteConfig {
    /// The simulated submission round-trip as a [`Duration`].
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_breakpoint: DEFAULT_MENU_BREAKPOINT,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_owned()
}

const fn default_menu_breakpoint() -> f64 {
    DEFAULT_MENU_BREAKPOINT
}

const fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

//! Cart inspection and mutation commands.
//!
//! The cart persists in a JSON snapshot file so it survives between
//! invocations the way a browser cart survives between visits.
//!
//! # Environment Variables
//!
//! - `ATELIER_PAGE_CONFIG` - Path to the page context JSON; when unset or
//!   missing, a built-in demo context is used
//! - `ATELIER_CART_PATH` - Cart snapshot path (default: `atelier-cart.json`)

use thiserror::Error;

use atelier_storefront::cart::storage::FileStorage;
use atelier_storefront::cart::{CartError, CartStore, LineItem};
use atelier_storefront::config::{ConfigError, PageConfig};

/// Built-in page context used when `ATELIER_PAGE_CONFIG` is not set.
const DEMO_CONTEXT: &str = r#"{
    "product": {
        "id": "b7dbf53a-7c7b-476c-a12e-304f8c85aa43",
        "name": "L'Enigma del Sacro Cuore",
        "price": { "amount": "250", "currency": "EUR" },
        "max_quantity": 3,
        "images": [
            "https://images.example.com/enigma/main.jpg",
            "https://images.example.com/enigma/detail.jpg"
        ]
    }
}"#;

/// Default cart snapshot path.
const DEFAULT_CART_PATH: &str = "atelier-cart.json";

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// The page context file could not be read.
    #[error("Could not read page context {path}: {source}")]
    ReadContext {
        path: String,
        source: std::io::Error,
    },

    /// The page context failed to parse or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A cart operation failed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Show the cart contents and totals.
///
/// # Errors
///
/// Returns an error if the context or persisted cart cannot be loaded.
pub fn show() -> Result<(), CartCommandError> {
    let (_, cart) = open_cart()?;

    if cart.is_empty() {
        tracing::info!("Your cart is empty");
        return Ok(());
    }

    for (index, item) in cart.items().iter().enumerate() {
        tracing::info!(
            "  [{index}] {} x{} @ {} = {}",
            item.name,
            item.quantity,
            item.price,
            item.price.times(item.quantity)
        );
    }
    tracing::info!("Items: {}, Total: {}", cart.count(), cart.total());
    Ok(())
}

/// Add the configured product to the cart.
///
/// # Errors
///
/// Returns an error if loading or persisting the cart fails. A quantity
/// cap rejection is reported as a warning, not an error.
pub fn add(quantity: u32) -> Result<(), CartCommandError> {
    let (config, mut cart) = open_cart()?;

    let Some(image) = config.product.images.first().cloned() else {
        // Validated configs always carry at least one image
        return Ok(());
    };

    let item = LineItem {
        id: config.product.id.clone(),
        name: config.product.name.clone(),
        price: config.product.price,
        quantity,
        image,
    };

    match cart.add(item) {
        Ok(outcome) => {
            tracing::info!(
                "Added {} (quantity now {})",
                config.product.name,
                outcome.quantity()
            );
            Ok(())
        }
        Err(CartError::CapExceeded { max }) => {
            tracing::warn!("Cannot add more items. Maximum quantity available: {max}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Remove the entry at `index`.
///
/// # Errors
///
/// Returns an error if the index is out of range or persisting fails.
pub fn remove(index: usize) -> Result<(), CartCommandError> {
    let (_, mut cart) = open_cart()?;
    let removed = cart.remove(index)?;
    tracing::info!("Removed {}", removed.name);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if persisting the empty cart fails.
pub fn clear() -> Result<(), CartCommandError> {
    let (_, mut cart) = open_cart()?;
    cart.clear()?;
    tracing::info!("Cart cleared");
    Ok(())
}

/// Load the page context and rehydrate the file-persisted cart.
fn open_cart() -> Result<(PageConfig, CartStore<FileStorage>), CartCommandError> {
    dotenvy::dotenv().ok();

    let config = load_page_config()?;
    let cart_path =
        std::env::var("ATELIER_CART_PATH").unwrap_or_else(|_| DEFAULT_CART_PATH.to_owned());

    let storage = FileStorage::new(&cart_path);
    let mut cart = CartStore::new(
        storage,
        config.storage_key.clone(),
        config.product.max_quantity,
        config.currency(),
    );
    cart.load()?;
    Ok((config, cart))
}

fn load_page_config() -> Result<PageConfig, CartCommandError> {
    match std::env::var("ATELIER_PAGE_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|source| CartCommandError::ReadContext { path, source })?;
            Ok(PageConfig::from_json(&raw)?)
        }
        Err(_) => Ok(PageConfig::from_json(DEMO_CONTEXT)?),
    }
}

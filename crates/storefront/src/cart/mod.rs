//! Cart store: line items, quantity merging, totals, and persistence.
//!
//! The cart is an owned store with explicit operations; nothing else in the
//! engine mutates it. Every successful mutation serializes the full line
//! item list through the [`storage::CartStorage`] boundary; [`CartStore::load`]
//! rehydrates it once at attach time.

pub mod storage;
pub mod view;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use atelier_core::{CurrencyCode, Price, ProductId};

use storage::{CartStorage, StorageError};

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog ID; at most one entry per ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Quantity, always >= 1 and capped at the product maximum.
    pub quantity: u32,
    /// Image shown in the cart modal.
    pub image: Url,
}

/// Errors that can occur when mutating or persisting the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity would exceed the product cap. The cart is
    /// left unchanged; the page surfaces this as a transient warning.
    #[error("maximum quantity available: {max}")]
    CapExceeded {
        /// The advertised per-product cap.
        max: u32,
    },

    /// A line item quantity of zero was requested.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// `remove` was called with an index past the end of the cart.
    #[error("no cart entry at index {index} (cart has {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Persistence failed, or persisted data was malformed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// How an `add` landed in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was not in the cart; a new entry was appended.
    Appended {
        /// Quantity of the new entry.
        quantity: u32,
    },
    /// The product was already present; quantities were merged.
    Merged {
        /// Quantity of the entry after the merge.
        quantity: u32,
    },
}

impl AddOutcome {
    /// The resulting quantity of the touched entry.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        match self {
            Self::Appended { quantity } | Self::Merged { quantity } => *quantity,
        }
    }
}

/// Owned cart state with an explicit persistence boundary.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<LineItem>,
    cap: u32,
    key: String,
    currency: CurrencyCode,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Create an empty cart over the given storage.
    ///
    /// `cap` is the per-product quantity maximum from the page context;
    /// `key` is the storage key the cart persists under.
    pub fn new(storage: S, key: impl Into<String>, cap: u32, currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            cap,
            key: key.into(),
            currency,
            storage,
        }
    }

    /// Rehydrate the cart from storage.
    ///
    /// A missing value leaves the cart empty. Malformed persisted data is
    /// an error; the cart is left empty in that case rather than half
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the backend fails or the stored
    /// value is not a JSON array of line items.
    pub fn load(&mut self) -> Result<(), CartError> {
        self.items.clear();
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(());
        };
        let items: Vec<LineItem> =
            serde_json::from_str(&raw).map_err(StorageError::Malformed)?;
        tracing::info!(key = %self.key, items = items.len(), "cart rehydrated");
        self.items = items;
        Ok(())
    }

    /// Add a line item, merging by product ID.
    ///
    /// If the product is already in the cart the quantities are summed; a
    /// sum past the cap rejects the add entirely and leaves the cart
    /// unchanged. A fresh entry past the cap is rejected the same way.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CapExceeded` when the cap would be exceeded,
    /// `CartError::ZeroQuantity` for an empty add, or `CartError::Storage`
    /// if persisting the mutation fails.
    pub fn add(&mut self, item: LineItem) -> Result<AddOutcome, CartError> {
        if item.quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let merged = existing.quantity + item.quantity;
            if merged > self.cap {
                tracing::warn!(
                    product = %item.id,
                    requested = merged,
                    max = self.cap,
                    "add to cart rejected: cap exceeded"
                );
                return Err(CartError::CapExceeded { max: self.cap });
            }
            existing.quantity = merged;
            self.save()?;
            tracing::info!(product = %item.id, quantity = merged, "cart quantity updated");
            return Ok(AddOutcome::Merged { quantity: merged });
        }

        if item.quantity > self.cap {
            tracing::warn!(
                product = %item.id,
                requested = item.quantity,
                max = self.cap,
                "add to cart rejected: cap exceeded"
            );
            return Err(CartError::CapExceeded { max: self.cap });
        }

        let quantity = item.quantity;
        tracing::info!(product = %item.id, quantity, "item added to cart");
        self.items.push(item);
        self.save()?;
        Ok(AddOutcome::Appended { quantity })
    }

    /// Remove the entry at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns `CartError::IndexOutOfBounds` for an index past the end, or
    /// `CartError::Storage` if persisting the mutation fails.
    pub fn remove(&mut self, index: usize) -> Result<LineItem, CartError> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.save()?;
        tracing::info!(product = %removed.id, "item removed from cart");
        Ok(removed)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting the mutation fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        self.save()?;
        tracing::info!(key = %self.key, "cart cleared");
        Ok(())
    }

    /// Sum of `price x quantity` over all entries.
    #[must_use]
    pub fn total(&self) -> Price {
        let amount = self
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, item| {
                acc + item.price.times(item.quantity).amount()
            });
        Price::new(amount, self.currency)
    }

    /// Sum of quantities over all entries (the badge value).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The per-product quantity cap.
    #[must_use]
    pub const fn cap(&self) -> u32 {
        self.cap
    }

    /// The currency totals are reported in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    fn save(&mut self) -> Result<(), CartError> {
        let raw = serde_json::to_string(&self.items).map_err(StorageError::Malformed)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::storage::MemoryStorage;
    use super::*;

    fn store(cap: u32) -> CartStore<MemoryStorage> {
        CartStore::new(MemoryStorage::new(), "cart", cap, CurrencyCode::EUR)
    }

    fn enigma(quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::new("b7dbf53a-7c7b-476c-a12e-304f8c85aa43"),
            name: "L'Enigma del Sacro Cuore".to_owned(),
            price: Price::new(Decimal::from(250), CurrencyCode::EUR),
            quantity,
            image: Url::parse("https://images.example.com/enigma/main.jpg").unwrap(),
        }
    }

    fn study(quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::new("5f21c0de-9d14-4a6f-8c3b-2e7a90d1b844"),
            name: "Study in Ochre".to_owned(),
            price: Price::from_cents(12050, CurrencyCode::EUR),
            quantity,
            image: Url::parse("https://images.example.com/study/main.jpg").unwrap(),
        }
    }

    #[test]
    fn test_add_appends_new_item() {
        let mut cart = store(3);
        let outcome = cart.add(enigma(2)).unwrap();
        assert_eq!(outcome, AddOutcome::Appended { quantity: 2 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_merges_quantities() {
        let mut cart = store(3);
        cart.add(enigma(1)).unwrap();
        let outcome = cart.add(enigma(2)).unwrap();
        assert_eq!(outcome, AddOutcome::Merged { quantity: 3 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_merge_past_cap_rejected_cart_unchanged() {
        let mut cart = store(3);
        cart.add(enigma(1)).unwrap();
        cart.add(enigma(2)).unwrap();

        let err = cart.add(enigma(1)).unwrap_err();
        assert!(matches!(err, CartError::CapExceeded { max: 3 }));
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.items().first().unwrap().quantity, 3);
    }

    #[test]
    fn test_fresh_add_past_cap_rejected() {
        let mut cart = store(3);
        let err = cart.add(enigma(4)).unwrap_err();
        assert!(matches!(err, CartError::CapExceeded { max: 3 }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = store(3);
        assert!(matches!(
            cart.add(enigma(0)),
            Err(CartError::ZeroQuantity)
        ));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = store(5);
        cart.add(enigma(1)).unwrap();
        cart.add(study(2)).unwrap();

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.name, "L'Enigma del Sacro Cuore");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().name, "Study in Ochre");
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut cart = store(5);
        cart.add(enigma(1)).unwrap();
        let err = cart.remove(3).unwrap_err();
        assert!(matches!(
            err,
            CartError::IndexOutOfBounds { index: 3, len: 1 }
        ));
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = store(5);
        assert_eq!(cart.total().display(), "€0.00");
        assert_eq!(cart.count(), 0);

        cart.add(enigma(2)).unwrap();
        cart.add(study(1)).unwrap();

        // 2 x 250.00 + 1 x 120.50
        assert_eq!(cart.total().display(), "€620.50");
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_persist_reload_roundtrip() {
        let mut storage = MemoryStorage::new();
        {
            let mut cart = CartStore::new(&mut storage, "cart", 5, CurrencyCode::EUR);
            cart.add(enigma(2)).unwrap();
            cart.add(study(1)).unwrap();
        }

        let mut reloaded = CartStore::new(&mut storage, "cart", 5, CurrencyCode::EUR);
        reloaded.load().unwrap();
        assert_eq!(reloaded.items(), [enigma(2), study(1)].as_slice());
    }

    #[test]
    fn test_load_missing_value_is_empty() {
        let mut cart = store(3);
        cart.load().unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_load_malformed_value_errors() {
        let mut storage = MemoryStorage::new();
        storage.seed("cart", "{definitely not a cart");

        let mut cart = CartStore::new(storage, "cart", 3, CurrencyCode::EUR);
        let err = cart.load().unwrap_err();
        assert!(matches!(
            err,
            CartError::Storage(StorageError::Malformed(_))
        ));
        assert!(cart.is_empty());
    }
}

//! Cart display data for the host's modal rendering.
//!
//! The modal never reads the store directly; it renders a [`CartView`]
//! snapshot with prices already formatted, so the host template stays free
//! of money arithmetic.

use url::Url;

use atelier_core::CurrencyCode;

use super::CartStore;
use super::storage::CartStorage;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Display name.
    pub name: String,
    /// Thumbnail shown next to the entry.
    pub image: Url,
    /// Formatted unit price (e.g., "€250.00").
    pub unit_price: String,
    /// Quantity of the entry.
    pub quantity: u32,
    /// Formatted `unit_price x quantity` (e.g., "€500.00").
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Entries in insertion order; a row's position is its remove index.
    pub items: Vec<CartItemView>,
    /// Formatted grand total.
    pub total: String,
    /// Sum of quantities (the badge value).
    pub count: u32,
}

impl CartView {
    /// An empty cart in the given currency.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            total: atelier_core::Price::zero(currency).display(),
            count: 0,
        }
    }

    /// Whether there is nothing to render but the empty-cart message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: CartStorage> From<&CartStore<S>> for CartView {
    fn from(cart: &CartStore<S>) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    name: item.name.clone(),
                    image: item.image.clone(),
                    unit_price: item.price.display(),
                    quantity: item.quantity,
                    line_total: item.price.times(item.quantity).display(),
                })
                .collect(),
            total: cart.total().display(),
            count: cart.count(),
        }
    }
}

//! Product card hover preload.
//!
//! Product cards swap to a secondary image on hover; the swap only looks
//! instant if the secondary image is already in cache. This component
//! collects the secondary URLs worth prefetching so the host can warm
//! them at startup.

use url::Url;

/// One product card's image pair.
#[derive(Debug, Clone)]
pub struct ProductCard {
    /// Image shown at rest.
    pub primary: Option<Url>,
    /// Image shown on hover, if the card has one.
    pub secondary: Option<Url>,
}

/// Hover-image prefetch list.
#[derive(Debug)]
pub struct HoverPreload {
    cards: Vec<ProductCard>,
}

impl HoverPreload {
    /// Create the preload list from the page's product cards.
    #[must_use]
    pub const fn new(cards: Vec<ProductCard>) -> Self {
        Self { cards }
    }

    /// URLs the host should prefetch.
    ///
    /// Cards missing either image are skipped; they have no hover swap.
    #[must_use]
    pub fn preload_urls(&self) -> Vec<&Url> {
        self.cards
            .iter()
            .filter(|card| card.primary.is_some())
            .filter_map(|card| card.secondary.as_ref())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_collects_secondary_images() {
        let preload = HoverPreload::new(vec![
            ProductCard {
                primary: Some(url("https://images.example.com/a-front.jpg")),
                secondary: Some(url("https://images.example.com/a-back.jpg")),
            },
            ProductCard {
                primary: Some(url("https://images.example.com/b-front.jpg")),
                secondary: None,
            },
            ProductCard {
                primary: None,
                secondary: Some(url("https://images.example.com/c-back.jpg")),
            },
        ]);

        let urls = preload.preload_urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls.first().map(|u| u.as_str()),
            Some("https://images.example.com/a-back.jpg")
        );
    }

    #[test]
    fn test_empty_page_has_nothing_to_preload() {
        let preload = HoverPreload::new(Vec::new());
        assert!(preload.preload_urls().is_empty());
    }
}

//! Product page controller.
//!
//! Wires the components of the product page around a single configured
//! product: gallery, quantity stepper, cart store, cart modal, accordion,
//! scroll-to-top, language toggle, header, and the notification center.
//! The host forwards events to the methods here and mirrors component
//! state back into markup.

use std::time::Instant;

use crate::cart::storage::CartStorage;
use crate::cart::view::CartView;
use crate::cart::{AddOutcome, CartError, CartStore, LineItem};
use crate::components::{
    Accordion, CartModal, Component, Gallery, HeaderScroll, LanguageToggle, QuantityStepper,
    ScrollToTop, StepOutcome,
};
use crate::config::PageConfig;
use crate::error::Result;
use crate::notify::{NotificationCenter, NotificationKind};

/// How an add-to-cart activation landed, page-side.
///
/// A rejected add already surfaced its warning notification; the host has
/// nothing further to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToCartOutcome {
    /// A new cart entry was appended with this quantity.
    Added(u32),
    /// An existing entry was merged to this quantity.
    Updated(u32),
    /// The add was dropped (cap exceeded, or the page is detached).
    Rejected,
}

/// The product page and its components.
#[derive(Debug)]
pub struct ProductPage<S> {
    config: PageConfig,
    pub gallery: Gallery,
    pub quantity: QuantityStepper,
    pub cart: CartStore<S>,
    pub modal: CartModal,
    pub accordion: Accordion,
    pub scroll_top: ScrollToTop,
    pub language: LanguageToggle,
    pub header: HeaderScroll,
    pub notifications: NotificationCenter,
    attached: bool,
}

impl<S: CartStorage> ProductPage<S> {
    /// Build the page from its context, the host's storage, and the
    /// accordion section titles found in markup.
    #[must_use]
    pub fn new(config: PageConfig, storage: S, sections: Vec<String>) -> Self {
        let cart = CartStore::new(
            storage,
            config.storage_key.clone(),
            config.product.max_quantity,
            config.currency(),
        );
        let gallery = Gallery::new(config.product.images.clone());
        let quantity = QuantityStepper::new(config.product.max_quantity);

        Self {
            config,
            gallery,
            quantity,
            cart,
            modal: CartModal::new(),
            accordion: Accordion::new(sections),
            scroll_top: ScrollToTop::new(),
            language: LanguageToggle::new(),
            header: HeaderScroll::new(),
            notifications: NotificationCenter::new(),
            attached: false,
        }
    }

    /// Attach all components and rehydrate the cart from storage.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Cart` if the persisted cart is malformed
    /// or the storage backend fails; the cart starts empty in that case
    /// and the page is otherwise usable.
    pub fn attach(&mut self) -> Result<()> {
        self.gallery.attach();
        self.quantity.attach();
        self.modal.attach();
        self.accordion.attach();
        self.scroll_top.attach();
        self.language.attach();
        self.header.attach();
        self.attached = true;
        tracing::info!(product = %self.config.product.id, "product page attached");
        self.cart.load()?;
        Ok(())
    }

    /// Detach all components; further events are ignored.
    pub fn detach(&mut self) {
        self.gallery.detach();
        self.quantity.detach();
        self.modal.detach();
        self.accordion.detach();
        self.scroll_top.detach();
        self.language.detach();
        self.header.detach();
        self.attached = false;
    }

    /// Whether the page is attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// The page context.
    #[must_use]
    pub const fn config(&self) -> &PageConfig {
        &self.config
    }

    /// A thumbnail was clicked.
    pub fn select_thumbnail(&mut self, index: usize) {
        self.gallery.select(index);
    }

    /// The quantity up-control was clicked.
    pub fn step_quantity_up(&mut self, now: Instant) {
        let outcome = self.quantity.increment();
        self.warn_on_cap(outcome, now);
    }

    /// The quantity down-control was clicked.
    pub fn step_quantity_down(&mut self) {
        self.quantity.decrement();
    }

    /// Raw text was typed into the quantity input.
    pub fn set_quantity_raw(&mut self, raw: &str, now: Instant) {
        let outcome = self.quantity.set_raw(raw);
        self.warn_on_cap(outcome, now);
    }

    /// The add-to-cart button was clicked.
    ///
    /// Builds a line item for the configured product at the stepper's
    /// quantity and the gallery's current image, then merges it into the
    /// cart. Success and cap rejection both surface a notification; only
    /// storage failures escape as errors.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Cart` if persisting the mutation fails.
    pub fn add_to_cart(&mut self, now: Instant) -> Result<AddToCartOutcome> {
        if !self.attached {
            return Ok(AddToCartOutcome::Rejected);
        }
        let Some(image) = self.gallery.main_image().cloned() else {
            return Ok(AddToCartOutcome::Rejected);
        };

        let item = LineItem {
            id: self.config.product.id.clone(),
            name: self.config.product.name.clone(),
            price: self.config.product.price,
            quantity: self.quantity.value(),
            image,
        };

        match self.cart.add(item) {
            Ok(AddOutcome::Appended { quantity }) => {
                self.notifications.show(
                    NotificationKind::Success,
                    "Added to cart successfully!",
                    now,
                );
                Ok(AddToCartOutcome::Added(quantity))
            }
            Ok(AddOutcome::Merged { quantity }) => {
                self.notifications.show(
                    NotificationKind::Success,
                    format!("Updated quantity to {quantity}"),
                    now,
                );
                Ok(AddToCartOutcome::Updated(quantity))
            }
            Err(CartError::CapExceeded { .. }) => {
                self.notifications.show(
                    NotificationKind::Warning,
                    "Cannot add more items. Maximum quantity reached.",
                    now,
                );
                Ok(AddToCartOutcome::Rejected)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// A remove button in the cart modal was clicked.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Cart` for an out-of-range index or a
    /// storage failure.
    pub fn remove_from_cart(&mut self, index: usize, now: Instant) -> Result<LineItem> {
        let removed = self.cart.remove(index)?;
        self.notifications
            .show(NotificationKind::Info, "Item removed from cart", now);
        Ok(removed)
    }

    /// The badge value shown on the cart button.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Snapshot the cart for modal rendering.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    /// The cart button was clicked.
    pub fn open_cart(&mut self) {
        self.modal.open();
    }

    /// The modal close control or overlay was clicked.
    pub fn close_cart(&mut self) {
        self.modal.close();
    }

    /// The checkout button was clicked. Checkout is not part of this
    /// site; the click only surfaces a notice.
    pub fn checkout(&mut self, now: Instant) {
        if self.attached {
            self.notifications.show(
                NotificationKind::Info,
                "Checkout functionality not implemented in this demo",
                now,
            );
        }
    }

    /// The language button was clicked.
    pub fn toggle_language(&mut self, now: Instant) {
        if !self.attached {
            return;
        }
        let language = self.language.toggle();
        self.notifications.show(
            NotificationKind::Info,
            format!("Language switched to {}", language.label()),
            now,
        );
    }

    /// A page scroll event at the given offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.header.on_scroll(offset);
        self.scroll_top.on_scroll(offset);
    }

    /// Advance the host clock (notification expiry).
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    fn warn_on_cap(&mut self, outcome: StepOutcome, now: Instant) {
        if let StepOutcome::CapReached(max) = outcome {
            self.notifications.show(
                NotificationKind::Warning,
                format!("Maximum quantity available: {max}"),
                now,
            );
        }
    }
}

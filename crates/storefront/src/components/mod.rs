//! Headless UI components.
//!
//! Each component models one interactive behavior of the site as plain
//! owned state: the host forwards events (clicks, scrolls, intersections,
//! input) and mirrors the resulting state into real markup. Components are
//! constructible without a live document and follow an explicit lifecycle:
//! events delivered before [`Component::attach`] or after
//! [`Component::detach`] are ignored.

pub mod accordion;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod hover;
pub mod language;
pub mod menu;
pub mod modal;
pub mod observer;
pub mod quantity;
pub mod scroll;

pub use accordion::Accordion;
pub use gallery::Gallery;
pub use header::HeaderScroll;
pub use hero::HeroText;
pub use hover::HoverPreload;
pub use language::{Language, LanguageToggle};
pub use menu::MobileMenu;
pub use modal::CartModal;
pub use observer::{FireOnceObserver, LazyImages, RevealOnScroll};
pub use quantity::{QuantityStepper, StepOutcome};
pub use scroll::{ScrollToTop, SmoothScroll};

/// Explicit component lifecycle.
///
/// `attach` stands in for wiring event handlers to a live document;
/// `detach` releases them. Between construction and `attach`, and after
/// `detach`, a component ignores events and holds its state steady.
pub trait Component {
    /// Start reacting to host events.
    fn attach(&mut self);

    /// Stop reacting to host events.
    fn detach(&mut self);

    /// Whether the component is currently attached.
    fn is_attached(&self) -> bool;
}

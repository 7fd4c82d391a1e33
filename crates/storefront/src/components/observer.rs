//! Fire-once visibility observers.
//!
//! The host reports intersection events for observed elements; each
//! element triggers exactly once and is then disengaged, so repeat events
//! are ignored. Two users: the fade-in reveal set and the lazy image
//! loader.

use std::collections::HashMap;
use std::collections::HashSet;

use url::Url;

use atelier_core::ElementId;

use super::Component;

/// Set of elements that each trigger exactly once on intersection.
#[derive(Debug)]
pub struct FireOnceObserver {
    pending: HashSet<ElementId>,
    attached: bool,
}

impl FireOnceObserver {
    /// Observe the given elements.
    #[must_use]
    pub fn new(elements: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            pending: elements.into_iter().collect(),
            attached: false,
        }
    }

    /// Add an element to the observed set.
    pub fn observe(&mut self, element: ElementId) {
        self.pending.insert(element);
    }

    /// Report that `element` intersected the viewport.
    ///
    /// Returns `true` exactly once per element; afterwards the element is
    /// disengaged and further reports return `false`.
    pub fn on_intersect(&mut self, element: &ElementId) -> bool {
        if !self.attached {
            return false;
        }
        self.pending.remove(element)
    }

    /// Elements still waiting to trigger.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Component for FireOnceObserver {
    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Fade-in-on-scroll reveal set.
///
/// When an observed element first becomes visible the host applies the
/// reveal class to it; the element is then disengaged.
#[derive(Debug)]
pub struct RevealOnScroll {
    observer: FireOnceObserver,
}

impl RevealOnScroll {
    /// Class the host applies to a revealed element.
    pub const REVEAL_CLASS: &'static str = "fade-in";

    /// Observe the given elements for reveal.
    #[must_use]
    pub fn new(elements: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            observer: FireOnceObserver::new(elements),
        }
    }

    /// Report an intersection; returns the class to apply, once.
    pub fn on_intersect(&mut self, element: &ElementId) -> Option<&'static str> {
        self.observer
            .on_intersect(element)
            .then_some(Self::REVEAL_CLASS)
    }

    /// Elements still waiting to reveal.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.observer.pending()
    }
}

impl Component for RevealOnScroll {
    fn attach(&mut self) {
        self.observer.attach();
    }

    fn detach(&mut self) {
        self.observer.detach();
    }

    fn is_attached(&self) -> bool {
        self.observer.is_attached()
    }
}

/// Lazy image loader.
///
/// Images carry their real source out-of-band (`data-src` in markup);
/// when one first becomes visible the host swaps the returned URL into
/// `src` and the image is disengaged.
#[derive(Debug)]
pub struct LazyImages {
    sources: HashMap<ElementId, Url>,
    attached: bool,
}

impl LazyImages {
    /// Observe the given images and their deferred sources.
    #[must_use]
    pub fn new(sources: impl IntoIterator<Item = (ElementId, Url)>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
            attached: false,
        }
    }

    /// Report an intersection; returns the source to swap in, once.
    pub fn on_intersect(&mut self, element: &ElementId) -> Option<Url> {
        if !self.attached {
            return None;
        }
        self.sources.remove(element)
    }

    /// Images still waiting to load.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.sources.len()
    }
}

impl Component for LazyImages {
    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

//! Site header scroll effects.
//!
//! Two class-membership effects driven by the page scroll offset: the
//! header picks up a `scrolled` treatment past a small offset, and hides
//! when the user scrolls down past a threshold, reappearing on any upward
//! scroll.

use super::Component;

/// Offset past which the header takes its `scrolled` treatment.
const SCROLLED_AT: f64 = 50.0;

/// Offset below which the header never hides.
const HIDE_AFTER: f64 = 100.0;

/// Header visibility state driven by scroll events.
#[derive(Debug)]
pub struct HeaderScroll {
    last_offset: f64,
    hidden: bool,
    scrolled: bool,
    attached: bool,
}

impl HeaderScroll {
    /// Create the header state for a page loaded at the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_offset: 0.0,
            hidden: false,
            scrolled: false,
            attached: false,
        }
    }

    /// Feed a scroll event with the current page offset.
    pub fn on_scroll(&mut self, offset: f64) {
        if !self.attached {
            return;
        }
        self.hidden = offset > self.last_offset && offset > HIDE_AFTER;
        self.scrolled = offset > SCROLLED_AT;
        self.last_offset = offset;
    }

    /// Whether the header is translated out of view.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the header carries the `scrolled` treatment.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for HeaderScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HeaderScroll {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderScroll {
        let mut h = HeaderScroll::new();
        h.attach();
        h
    }

    #[test]
    fn test_hides_only_when_scrolling_down_past_threshold() {
        let mut h = header();

        h.on_scroll(80.0);
        assert!(!h.is_hidden());

        h.on_scroll(150.0);
        assert!(h.is_hidden());
    }

    #[test]
    fn test_upward_scroll_reveals() {
        let mut h = header();
        h.on_scroll(200.0);
        h.on_scroll(400.0);
        assert!(h.is_hidden());

        h.on_scroll(380.0);
        assert!(!h.is_hidden());
    }

    #[test]
    fn test_scrolled_treatment_threshold() {
        let mut h = header();
        h.on_scroll(30.0);
        assert!(!h.is_scrolled());

        h.on_scroll(51.0);
        assert!(h.is_scrolled());

        h.on_scroll(10.0);
        assert!(!h.is_scrolled());
    }

    #[test]
    fn test_detached_ignores_scroll() {
        let mut h = HeaderScroll::new();
        h.on_scroll(500.0);
        assert!(!h.is_hidden());
        assert!(!h.is_scrolled());
    }
}

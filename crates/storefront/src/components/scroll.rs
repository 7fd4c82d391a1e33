//! Scroll helpers: the scroll-to-top button and smooth anchor scrolling.

use super::Component;

/// Offset past which the scroll-to-top button shows.
const SHOW_AFTER: f64 = 300.0;

/// Scroll-to-top button visibility.
#[derive(Debug)]
pub struct ScrollToTop {
    visible: bool,
    attached: bool,
}

impl ScrollToTop {
    /// Create the hidden button state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible: false,
            attached: false,
        }
    }

    /// Feed a scroll event with the current page offset.
    pub fn on_scroll(&mut self, offset: f64) {
        if self.attached {
            self.visible = offset > SHOW_AFTER;
        }
    }

    /// Whether the button is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Activate the button: the host should smooth-scroll to this offset.
    #[must_use]
    pub const fn target(&self) -> f64 {
        0.0
    }
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ScrollToTop {
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

/// Smooth in-page anchor scrolling.
///
/// Anchor targets sit underneath the fixed header, so the scroll target is
/// the anchor's offset minus the header height, floored at the top of the
/// page. The same height feeds the host's `scroll-padding-top`.
#[derive(Debug)]
pub struct SmoothScroll {
    header_height: f64,
}

impl SmoothScroll {
    /// Create the helper with the measured header height in pixels.
    #[must_use]
    pub const fn new(header_height: f64) -> Self {
        Self { header_height }
    }

    /// Resolve an anchor click to a scroll offset.
    ///
    /// `href` is the raw anchor href; `anchor_offset` is the target
    /// element's offset as measured by the host, `None` when the element
    /// does not exist. A bare `#` and missing targets resolve to `None`
    /// (the click falls through untouched).
    #[must_use]
    pub fn resolve(&self, href: &str, anchor_offset: Option<f64>) -> Option<f64> {
        if href == "#" || !href.starts_with('#') {
            return None;
        }
        anchor_offset.map(|offset| (offset - self.header_height).max(0.0))
    }

    /// The `scroll-padding-top` the host should apply, in pixels.
    #[must_use]
    pub const fn scroll_padding(&self) -> f64 {
        self.header_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_top_visibility() {
        let mut button = ScrollToTop::new();
        button.attach();

        button.on_scroll(120.0);
        assert!(!button.is_visible());

        button.on_scroll(450.0);
        assert!(button.is_visible());
        assert!((button.target() - 0.0).abs() < f64::EPSILON);

        button.on_scroll(0.0);
        assert!(!button.is_visible());
    }

    #[test]
    fn test_detached_button_stays_hidden() {
        let mut button = ScrollToTop::new();
        button.on_scroll(1000.0);
        assert!(!button.is_visible());
    }

    #[test]
    fn test_anchor_resolves_below_header() {
        let scroll = SmoothScroll::new(80.0);
        assert_eq!(scroll.resolve("#commissions", Some(500.0)), Some(420.0));
    }

    #[test]
    fn test_anchor_near_top_floors_at_zero() {
        let scroll = SmoothScroll::new(80.0);
        assert_eq!(scroll.resolve("#top", Some(30.0)), Some(0.0));
    }

    #[test]
    fn test_bare_and_missing_anchors_fall_through() {
        let scroll = SmoothScroll::new(80.0);
        assert_eq!(scroll.resolve("#", Some(100.0)), None);
        assert_eq!(scroll.resolve("#gone", None), None);
        assert_eq!(scroll.resolve("/about", Some(100.0)), None);
    }

    #[test]
    fn test_scroll_padding_matches_header() {
        let scroll = SmoothScroll::new(64.0);
        assert!((scroll.scroll_padding() - 64.0).abs() < f64::EPSILON);
    }
}

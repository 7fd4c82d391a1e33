//! Mobile navigation menu.
//!
//! A two-state toggle with a body scroll lock while open. The menu closes
//! when a nav link is activated and when the viewport grows past the
//! mobile breakpoint.

use super::Component;

/// Mobile menu open/close state.
#[derive(Debug)]
pub struct MobileMenu {
    open: bool,
    breakpoint: f64,
    attached: bool,
}

impl MobileMenu {
    /// Create a closed menu with the given breakpoint in pixels.
    #[must_use]
    pub const fn new(breakpoint: f64) -> Self {
        Self {
            open: false,
            breakpoint,
            attached: false,
        }
    }

    /// Toggle the menu.
    pub fn toggle(&mut self) {
        if self.attached {
            self.open = !self.open;
        }
    }

    /// Close the menu.
    pub fn close(&mut self) {
        if self.attached {
            self.open = false;
        }
    }

    /// A nav link was activated; the menu closes so the page behind is
    /// visible at the scroll target.
    pub fn handle_link_click(&mut self) {
        self.close();
    }

    /// The viewport was resized to `width` pixels.
    pub fn handle_resize(&mut self, width: f64) {
        if self.attached && width > self.breakpoint {
            self.close();
        }
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the host should lock body scrolling.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.open
    }
}

impl Component for MobileMenu {
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

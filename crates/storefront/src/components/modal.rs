//! Cart modal open/close state.
//!
//! The modal's contents come from [`crate::cart::view::CartView`]; this
//! component only tracks visibility and the body scroll lock that goes
//! with it.

use super::Component;

/// Cart modal visibility.
#[derive(Debug, Default)]
pub struct CartModal {
    open: bool,
    attached: bool,
}

impl CartModal {
    /// Create the closed modal state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal.
    pub fn open(&mut self) {
        if self.attached {
            self.open = true;
        }
    }

    /// Close the modal (close button or overlay click).
    pub fn close(&mut self) {
        if self.attached {
            self.open = false;
        }
    }

    /// Whether the modal is shown.
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

impl Component for CartModal {
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

    #[test]
    fn test_open_close_cycle() {
        let mut modal = CartModal::new();
        modal.attach();

        modal.open();
        assert!(modal.is_open());
        assert!(modal.scroll_locked());

        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn test_detached_stays_closed() {
        let mut modal = CartModal::new();
        modal.open();
        assert!(!modal.is_open());
    }
}

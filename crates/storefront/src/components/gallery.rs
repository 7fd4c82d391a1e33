//! Product image gallery.
//!
//! A strip of thumbnails drives one main image. Exactly one thumbnail is
//! active at a time; selecting one swaps the main image and starts a short
//! fade the host plays out.

use url::Url;

use super::Component;

/// Thumbnail-driven main image state.
#[derive(Debug)]
pub struct Gallery {
    images: Vec<Url>,
    active: usize,
    fade_pending: bool,
    attached: bool,
}

impl Gallery {
    /// Create a gallery over the page's image list (main image first).
    #[must_use]
    pub fn new(images: Vec<Url>) -> Self {
        Self {
            images,
            active: 0,
            fade_pending: false,
            attached: false,
        }
    }

    /// Select the thumbnail at `index`.
    ///
    /// Deactivates every other thumbnail, points the main image at the
    /// selected one, and arms the fade. Out-of-range indices and events
    /// while detached are ignored.
    pub fn select(&mut self, index: usize) {
        if !self.attached || index >= self.images.len() {
            return;
        }
        self.active = index;
        self.fade_pending = true;
    }

    /// Index of the active thumbnail.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// URL the main image should show, if the gallery has any images.
    #[must_use]
    pub fn main_image(&self) -> Option<&Url> {
        self.images.get(self.active)
    }

    /// Whether a fade is armed for the host to play.
    #[must_use]
    pub const fn fade_pending(&self) -> bool {
        self.fade_pending
    }

    /// Mark the armed fade as played.
    pub fn complete_fade(&mut self) {
        self.fade_pending = false;
    }

    /// The full image list.
    #[must_use]
    pub fn images(&self) -> &[Url] {
        &self.images
    }
}

impl Component for Gallery {
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

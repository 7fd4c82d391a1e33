//! Site-wide controller.
//!
//! The independent components instantiated once at startup: mobile menu,
//! header scroll effect, contact and commission forms, smooth scroll,
//! fade-in reveal, lazy image loading, hover preload, and the hero text
//! animation. None of them depend on each other; this struct only exists
//! so the host wires them up in one place.

use url::Url;

use atelier_core::ElementId;

use crate::components::hover::ProductCard;
use crate::components::{
    Component, HeaderScroll, HeroText, HoverPreload, LazyImages, MobileMenu, RevealOnScroll,
    SmoothScroll,
};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::forms::submit::Submitter;
use crate::forms::{self, FileUploadLabel, FormData, FormHandler, ValidatedForm};

/// Markup inventory the host scans once at startup.
#[derive(Debug, Default)]
pub struct SiteContext {
    /// Measured height of the fixed header, in pixels.
    pub header_height: f64,
    /// Elements carrying the reveal-on-scroll class.
    pub reveal_elements: Vec<ElementId>,
    /// Images with deferred sources and the source to swap in.
    pub lazy_images: Vec<(ElementId, Url)>,
    /// Product cards with their image pairs.
    pub product_cards: Vec<ProductCard>,
    /// Hero text lines, headline first.
    pub hero_lines: Vec<String>,
}

/// The site-wide components.
#[derive(Debug)]
pub struct Site<S> {
    pub menu: MobileMenu,
    pub header: HeaderScroll,
    pub contact: FormHandler<S>,
    pub commission: FormHandler<S>,
    pub commission_files: FileUploadLabel,
    pub smooth_scroll: SmoothScroll,
    pub reveal: RevealOnScroll,
    pub lazy_images: LazyImages,
    pub hover: HoverPreload,
    pub hero: HeroText,
    attached: bool,
}

impl<S: Submitter + Clone> Site<S> {
    /// Build the site components from config, the scanned markup
    /// inventory, and the submission capability (shared by both forms).
    #[must_use]
    pub fn new(config: &SiteConfig, context: SiteContext, submitter: S) -> Self {
        Self {
            menu: MobileMenu::new(config.menu_breakpoint),
            header: HeaderScroll::new(),
            contact: FormHandler::new(forms::contact(), submitter.clone()),
            commission: FormHandler::new(forms::commission(), submitter),
            commission_files: FileUploadLabel::new(),
            smooth_scroll: SmoothScroll::new(context.header_height),
            reveal: RevealOnScroll::new(context.reveal_elements),
            lazy_images: LazyImages::new(context.lazy_images),
            hover: HoverPreload::new(context.product_cards),
            hero: HeroText::new(context.hero_lines),
            attached: false,
        }
    }

    /// Attach every component.
    pub fn attach(&mut self) {
        self.menu.attach();
        self.header.attach();
        self.contact.attach();
        self.commission.attach();
        self.reveal.attach();
        self.lazy_images.attach();
        self.hero.attach();
        self.attached = true;
        tracing::info!("site components initialized");
    }

    /// Detach every component.
    pub fn detach(&mut self) {
        self.menu.detach();
        self.header.detach();
        self.contact.detach();
        self.commission.detach();
        self.reveal.detach();
        self.lazy_images.detach();
        self.hero.detach();
        self.attached = false;
    }

    /// Whether the site controller is attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Submit the contact form.
    ///
    /// # Errors
    ///
    /// See [`FormHandler::submit`].
    pub async fn submit_contact(&mut self, data: &FormData) -> Result<ValidatedForm> {
        self.contact.submit(data).await
    }

    /// Submit the commission form; the file picker label resets on
    /// success along with the rest of the form.
    ///
    /// # Errors
    ///
    /// See [`FormHandler::submit`].
    pub async fn submit_commission(&mut self, data: &FormData) -> Result<ValidatedForm> {
        let validated = self.commission.submit(data).await?;
        self.commission_files.reset();
        Ok(validated)
    }

    /// A page scroll event at the given offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.header.on_scroll(offset);
    }

    /// The viewport was resized to `width` pixels.
    pub fn on_resize(&mut self, width: f64) {
        self.menu.handle_resize(width);
    }
}

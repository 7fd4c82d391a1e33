//! Header language label toggle.
//!
//! Flips the header button label between EN and FR. This is a label
//! toggle only; it does not retranslate the page.

use super::Component;

/// Selectable display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// The header button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fr => "FR",
        }
    }

    /// The other language.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

/// Language button state.
#[derive(Debug, Default)]
pub struct LanguageToggle {
    current: Language,
    attached: bool,
}

impl LanguageToggle {
    /// Create the toggle, starting on EN.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the language and return the new selection.
    pub fn toggle(&mut self) -> Language {
        if self.attached {
            self.current = self.current.other();
        }
        self.current
    }

    /// The current selection.
    #[must_use]
    pub const fn current(&self) -> Language {
        self.current
    }
}

impl Component for LanguageToggle {
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

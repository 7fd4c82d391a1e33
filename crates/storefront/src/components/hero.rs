//! Hero text stagger animation.
//!
//! The hero headline animates in one character at a time. The engine
//! splits each text line into characters with a stagger index; the host
//! renders one span per character and plays the animation when the hero
//! is armed (on attach, the frame after first paint).

use super::Component;

/// One character of hero text with its stagger position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroChar {
    pub ch: char,
    /// Position within the line, used as the animation delay factor.
    pub index: usize,
}

/// Split a hero line into stagger-indexed characters.
///
/// Leading and trailing whitespace is trimmed; interior spaces keep their
/// index so word gaps hold their timing.
#[must_use]
pub fn wrap_text(text: &str) -> Vec<HeroChar> {
    text.trim()
        .chars()
        .enumerate()
        .map(|(index, ch)| HeroChar { ch, index })
        .collect()
}

/// Hero headline animation state.
#[derive(Debug)]
pub struct HeroText {
    lines: Vec<Vec<HeroChar>>,
    armed: bool,
}

impl HeroText {
    /// Create the hero from its text lines (headline first).
    #[must_use]
    pub fn new(lines: impl IntoIterator<Item = String>) -> Self {
        Self {
            lines: lines.into_iter().map(|line| wrap_text(&line)).collect(),
            armed: false,
        }
    }

    /// The character runs the host renders, one per line.
    #[must_use]
    pub fn lines(&self) -> &[Vec<HeroChar>] {
        &self.lines
    }

    /// Whether the host should be playing the stagger animation.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Component for HeroText {
    fn attach(&mut self) {
        self.armed = true;
    }

    fn detach(&mut self) {
        self.armed = false;
    }

    fn is_attached(&self) -> bool {
        self.armed
    }
}

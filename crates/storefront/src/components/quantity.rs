//! Quantity stepper.
//!
//! Holds a value in `1..=cap`. Stepping past the cap and raw input above
//! the cap clamp and report [`StepOutcome::CapReached`], which the page
//! surfaces as a transient warning. Unparseable raw input resets to 1.

use super::Component;

/// Result of a stepper interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The value changed to the contained amount.
    Changed(u32),
    /// Nothing changed (already at a bound, or detached).
    Unchanged,
    /// The cap was hit; the value is clamped to the contained maximum.
    CapReached(u32),
}

/// Bounded quantity input state.
#[derive(Debug)]
pub struct QuantityStepper {
    value: u32,
    cap: u32,
    attached: bool,
}

impl QuantityStepper {
    /// Create a stepper with the page's quantity cap, starting at 1.
    #[must_use]
    pub const fn new(cap: u32) -> Self {
        Self {
            value: 1,
            cap,
            attached: false,
        }
    }

    /// The current value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Step up by one, clamping at the cap.
    pub fn increment(&mut self) -> StepOutcome {
        if !self.attached {
            return StepOutcome::Unchanged;
        }
        if self.value >= self.cap {
            return StepOutcome::CapReached(self.cap);
        }
        self.value += 1;
        StepOutcome::Changed(self.value)
    }

    /// Step down by one, flooring at 1.
    pub fn decrement(&mut self) -> StepOutcome {
        if !self.attached || self.value <= 1 {
            return StepOutcome::Unchanged;
        }
        self.value -= 1;
        StepOutcome::Changed(self.value)
    }

    /// Apply raw text typed into the input.
    ///
    /// Unparseable input and values below 1 reset to 1 silently; values
    /// above the cap clamp to it and report [`StepOutcome::CapReached`].
    pub fn set_raw(&mut self, raw: &str) -> StepOutcome {
        if !self.attached {
            return StepOutcome::Unchanged;
        }
        match raw.trim().parse::<u32>() {
            Ok(value) if value > self.cap => {
                self.value = self.cap;
                StepOutcome::CapReached(self.cap)
            }
            Ok(value) if value >= 1 => {
                let changed = value != self.value;
                self.value = value;
                if changed {
                    StepOutcome::Changed(value)
                } else {
                    StepOutcome::Unchanged
                }
            }
            _ => {
                let changed = self.value != 1;
                self.value = 1;
                if changed {
                    StepOutcome::Changed(1)
                } else {
                    StepOutcome::Unchanged
                }
            }
        }
    }
}

impl Component for QuantityStepper {
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

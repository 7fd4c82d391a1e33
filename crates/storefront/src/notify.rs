//! Transient notification center.
//!
//! One notification is visible at a time; showing a new one replaces the
//! current one immediately. Expiry is host-driven: the host calls
//! [`NotificationCenter::tick`] with its clock and hides the notification
//! when it is reported dismissed. No timer threads.

use std::time::{Duration, Instant};

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    /// Class-name fragment the host styles by.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A user-visible transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Single-slot notification state with host-driven expiry.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    expires_at: Option<Instant>,
    display_for: Duration,
}

impl NotificationCenter {
    /// How long a notification stays visible by default.
    pub const DISPLAY_FOR: Duration = Duration::from_secs(3);

    /// Create a center with the default display duration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_display_for(Self::DISPLAY_FOR)
    }

    /// Create a center with a custom display duration.
    #[must_use]
    pub const fn with_display_for(display_for: Duration) -> Self {
        Self {
            current: None,
            expires_at: None,
            display_for,
        }
    }

    /// Show a notification, replacing any visible one.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(kind = kind.as_str(), %message, "notification shown");
        self.current = Some(Notification { kind, message });
        self.expires_at = Some(now + self.display_for);
    }

    /// The currently visible notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Advance the host clock, dismissing an expired notification.
    ///
    /// Returns the notification that was dismissed on this tick, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Notification> {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.expires_at = None;
                self.current.take()
            }
            _ => None,
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

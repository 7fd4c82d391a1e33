//! Unified error handling for the storefront engine.
//!
//! Provides a unified `StorefrontError` built from the per-module error
//! enums. Page-level operations return `Result<T, StorefrontError>`; the
//! host decides how each failure is surfaced (blocking alert, transient
//! notification, or log line).

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::forms::ValidationError;
use crate::forms::submit::SubmitError;

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart mutation or persistence failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Page context failed to load or validate.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Form data failed schema validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The submission endpoint reported a failure.
    #[error("Submit error: {0}")]
    Submit(#[from] SubmitError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

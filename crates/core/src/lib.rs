//! Atelier Core - Shared types library.
//!
//! This crate provides common types used across all Atelier components:
//! - `storefront` - Headless UI engine for the public site
//! - `cli` - Command-line tools for inspecting and driving the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no host bindings, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

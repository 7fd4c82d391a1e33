//! Atelier Storefront - headless UI engine for the public site.
//!
//! This crate models the interactive behavior of the storefront (gallery,
//! quantity stepper, cart, accordion, scroll effects, contact and commission
//! forms) as plain owned state, decoupled from any document. A host shell -
//! a browser bridge, the CLI, or a test - feeds events in and mirrors the
//! exposed state back out to real markup.
//!
//! # Architecture
//!
//! - [`page::ProductPage`] wires the components of the product page around a
//!   single configured product and an owned [`cart::CartStore`].
//! - [`site::Site`] wires the independent site-wide components (menu, header,
//!   forms, observers) instantiated once at startup.
//! - Components implement [`components::Component`]: they are constructible
//!   without a live document and only react to events while attached.
//! - Persistence and submission are capabilities ([`cart::storage::CartStorage`],
//!   [`forms::submit::Submitter`]) injected by the host.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod notify;
pub mod page;
pub mod site;

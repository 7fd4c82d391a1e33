//! Integration tests for Atelier.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `product_page` - Full product page flows over the cart store
//! - `site` - Site-wide components and the form submission flow
//!
//! This crate also holds the shared test doubles: a recording submitter
//! and a demo page context.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use url::Url;

use atelier_core::{CurrencyCode, Price, ProductId};
use atelier_storefront::config::{PageConfig, ProductConfig};
use atelier_storefront::forms::ValidatedForm;
use atelier_storefront::forms::submit::{SubmitError, Submitter};

/// Submission endpoint test double: records every submission, or fails
/// each one when built with [`RecordingSubmitter::failing`].
#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    submissions: Arc<Mutex<Vec<ValidatedForm>>>,
    fail: bool,
}

impl RecordingSubmitter {
    /// A submitter that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A submitter that fails every submission.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Everything submitted so far.
    #[must_use]
    pub fn submissions(&self) -> Vec<ValidatedForm> {
        self.submissions
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Submitter for RecordingSubmitter {
    async fn submit(&self, form: &ValidatedForm) -> Result<(), SubmitError> {
        if self.fail {
            return Err(SubmitError::Endpoint("endpoint down".to_owned()));
        }
        self.submissions
            .lock()
            .map_err(|_| SubmitError::Endpoint("poisoned".to_owned()))?
            .push(form.clone());
        Ok(())
    }
}

/// The demo product the original page is built around.
#[must_use]
pub fn demo_page_config(max_quantity: u32) -> PageConfig {
    PageConfig {
        product: ProductConfig {
            id: ProductId::new("b7dbf53a-7c7b-476c-a12e-304f8c85aa43"),
            name: "L'Enigma del Sacro Cuore".to_owned(),
            price: Price::new(Decimal::from(250), CurrencyCode::EUR),
            max_quantity,
            images: vec![
                demo_url("https://images.example.com/enigma/main.jpg"),
                demo_url("https://images.example.com/enigma/detail.jpg"),
                demo_url("https://images.example.com/enigma/frame.jpg"),
            ],
        },
        storage_key: "cart".to_owned(),
    }
}

fn demo_url(s: &str) -> Url {
    Url::parse(s).expect("demo image url")
}

//! Form submission demo commands.
//!
//! Runs the full client-side flow - schema validation, busy state,
//! simulated round trip - exactly as the site would, against the
//! simulated endpoint.

use thiserror::Error;

use atelier_storefront::components::Component;
use atelier_storefront::config::SiteConfig;
use atelier_storefront::error::StorefrontError;
use atelier_storefront::forms::{self, FormData, FormHandler, SimulatedSubmitter};

/// Errors that can occur during submit commands.
#[derive(Debug, Error)]
pub enum SubmitCommandError {
    /// Validation or the simulated endpoint failed.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),
}

/// Submit the contact form.
///
/// # Errors
///
/// Returns an error if validation fails or the endpoint reports failure.
pub async fn contact(
    name: &str,
    surname: &str,
    email: &str,
    message: &str,
) -> Result<(), SubmitCommandError> {
    let data = FormData::from([
        ("name".to_owned(), name.to_owned()),
        ("surname".to_owned(), surname.to_owned()),
        ("email".to_owned(), email.to_owned()),
        ("message".to_owned(), message.to_owned()),
    ]);
    submit(forms::contact(), &data).await
}

/// Submit the commission form.
///
/// # Errors
///
/// Returns an error if validation fails or the endpoint reports failure.
pub async fn commission(
    fullname: &str,
    email: &str,
    address: &str,
    size: &str,
    description: &str,
) -> Result<(), SubmitCommandError> {
    let data = FormData::from([
        ("fullname".to_owned(), fullname.to_owned()),
        ("email".to_owned(), email.to_owned()),
        ("address".to_owned(), address.to_owned()),
        ("size".to_owned(), size.to_owned()),
        ("description".to_owned(), description.to_owned()),
    ]);
    submit(forms::commission(), &data).await
}

async fn submit(schema: forms::FormSchema, data: &FormData) -> Result<(), SubmitCommandError> {
    let config = SiteConfig::default();
    let mut handler = FormHandler::new(schema, SimulatedSubmitter::new(config.submit_delay()));
    handler.attach();

    let validated = handler.submit(data).await?;
    tracing::info!(
        form = validated.form,
        email = validated.email.as_ref().map_or("-", |e| e.as_str()),
        "Submission acknowledged"
    );
    Ok(())
}

//! Injectable form submission capability.
//!
//! In a real deployment submissions go to an external endpoint; here the
//! production stand-in resolves after a fixed delay, and tests substitute
//! their own recording or failing implementations.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use super::ValidatedForm;

/// Default simulated round-trip.
const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Errors a submission endpoint can report.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint rejected or failed the submission.
    #[error("An error occurred. Please try again.")]
    Endpoint(String),

    /// The form handler is not wired to a document.
    #[error("form is not attached")]
    Detached,
}

/// Asynchronous submission capability for validated form data.
pub trait Submitter {
    /// Submit a validated form to the endpoint.
    fn submit(
        &self,
        form: &ValidatedForm,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Stand-in endpoint: logs the payload and resolves after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Create a submitter with the given round-trip delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, form: &ValidatedForm) -> Result<(), SubmitError> {
        tracing::debug!(
            form = form.form,
            payload = %serde_json::to_string(&form.fields).unwrap_or_default(),
            "simulated submission"
        );
        tokio::time::sleep(self.delay).await;
        tracing::info!(form = form.form, "simulated submission acknowledged");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;

    use super::*;

    fn form() -> ValidatedForm {
        ValidatedForm {
            form: "contact",
            fields: BTreeMap::from([("name".to_owned(), "Ada".to_owned())]),
            email: None,
            validated_at: Utc::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submit_resolves_after_delay() {
        let submitter = SimulatedSubmitter::default();
        let started = tokio::time::Instant::now();

        submitter.submit(&form()).await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(1000));
    }

    #[test]
    fn test_endpoint_error_message_is_user_facing() {
        let err = SubmitError::Endpoint("boom".to_owned());
        assert_eq!(err.to_string(), "An error occurred. Please try again.");
    }
}

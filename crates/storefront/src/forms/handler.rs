//! Form submission flow.
//!
//! Ties a schema to a submitter: validate, flip the submit control busy,
//! await the endpoint, then reset and show the success indicator. A failed
//! validation changes no state; a failed submission keeps the entered
//! data. Overlapping submissions are not guarded against - a double
//! activation can start two concurrent round trips.

use crate::components::Component;
use crate::error::StorefrontError;

use super::submit::{SubmitError, Submitter};
use super::{FormData, FormSchema, ValidatedForm};

/// A form's submission state machine.
#[derive(Debug)]
pub struct FormHandler<S> {
    schema: FormSchema,
    submitter: S,
    sending: bool,
    success_visible: bool,
    attached: bool,
}

impl<S: Submitter> FormHandler<S> {
    /// Label the submit control shows while a round trip is in flight.
    pub const SENDING_LABEL: &'static str = "Sending...";

    /// Create a handler for `schema` over the given submitter.
    pub const fn new(schema: FormSchema, submitter: S) -> Self {
        Self {
            schema,
            submitter,
            sending: false,
            success_visible: false,
            attached: false,
        }
    }

    /// Run the full submission flow for one set of raw form data.
    ///
    /// On success the host should reset its form fields and show the
    /// success indicator until [`FormHandler::dismiss_success`].
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` when the data fails the
    /// schema (surface as a blocking alert; nothing was submitted), or
    /// `StorefrontError::Submit` when the endpoint fails (the entered
    /// data is kept).
    pub async fn submit(&mut self, data: &FormData) -> Result<ValidatedForm, StorefrontError> {
        if !self.attached {
            return Err(SubmitError::Detached.into());
        }

        let validated = self.schema.validate(data)?;

        self.sending = true;
        tracing::info!(form = self.schema.name, "form submission started");
        let result = self.submitter.submit(&validated).await;
        self.sending = false;

        match result {
            Ok(()) => {
                self.success_visible = true;
                tracing::info!(form = self.schema.name, "form submission succeeded");
                Ok(validated)
            }
            Err(err) => {
                tracing::error!(form = self.schema.name, error = %err, "form submission failed");
                Err(err.into())
            }
        }
    }

    /// Whether a round trip is in flight (submit control disabled,
    /// label swapped to [`FormHandler::SENDING_LABEL`]).
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether the success indicator is shown.
    #[must_use]
    pub const fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Hide the success indicator (the host's auto-hide timer fired).
    pub fn dismiss_success(&mut self) {
        self.success_visible = false;
    }

    /// The schema this handler validates against.
    #[must_use]
    pub const fn schema(&self) -> &FormSchema {
        &self.schema
    }
}

impl<S> Component for FormHandler<S> {
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

/// Commission form file picker label.
///
/// Shows the chosen file names, or a placeholder when nothing is
/// attached.
#[derive(Debug)]
pub struct FileUploadLabel {
    label: String,
}

impl FileUploadLabel {
    /// Label shown when no files are attached.
    pub const PLACEHOLDER: &'static str = "Add file";

    /// Create the empty picker label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: Self::PLACEHOLDER.to_owned(),
        }
    }

    /// The picker selection changed.
    pub fn set_files<I, T>(&mut self, names: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_owned())
            .collect();
        self.label = if names.is_empty() {
            Self::PLACEHOLDER.to_owned()
        } else {
            names.join(", ")
        };
    }

    /// Clear the selection back to the placeholder.
    pub fn reset(&mut self) {
        self.label = Self::PLACEHOLDER.to_owned();
    }

    /// The label the host renders on the picker button.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for FileUploadLabel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::super::submit::SubmitError;
    use super::super::{ValidatedForm, contact};
    use super::*;

    /// Test double that records submissions and can be told to fail.
    #[derive(Default)]
    struct RecordingSubmitter {
        submissions: Mutex<Vec<ValidatedForm>>,
        fail: bool,
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

    fn valid_data() -> FormData {
        FormData::from([
            ("name".to_owned(), "Ada".to_owned()),
            ("surname".to_owned(), "Rossi".to_owned()),
            ("email".to_owned(), "ada@example.com".to_owned()),
            ("message".to_owned(), "Hello".to_owned()),
        ])
    }

    #[tokio::test]
    async fn test_valid_submit_records_and_shows_success() {
        let mut handler = FormHandler::new(contact(), RecordingSubmitter::default());
        handler.attach();

        handler.submit(&valid_data()).await.unwrap();

        assert!(handler.success_visible());
        assert!(!handler.is_sending());

        handler.dismiss_success();
        assert!(!handler.success_visible());
    }

    #[tokio::test]
    async fn test_invalid_data_never_reaches_submitter() {
        let mut handler = FormHandler::new(contact(), RecordingSubmitter::default());
        handler.attach();

        let mut data = valid_data();
        data.remove("message");

        let err = handler.submit(&data).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Validation(_)));
        assert!(!handler.success_visible());
        assert!(handler
            .submitter
            .submissions
            .lock()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_endpoint_failure_surfaces_alert() {
        let submitter = RecordingSubmitter {
            fail: true,
            ..RecordingSubmitter::default()
        };
        let mut handler = FormHandler::new(contact(), submitter);
        handler.attach();

        let err = handler.submit(&valid_data()).await.unwrap_err();
        assert_eq!(err.to_string(), "Submit error: An error occurred. Please try again.");
        assert!(!handler.success_visible());
        assert!(!handler.is_sending());
    }

    #[tokio::test]
    async fn test_detached_handler_refuses() {
        let mut handler = FormHandler::new(contact(), RecordingSubmitter::default());
        let err = handler.submit(&valid_data()).await.unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Submit(SubmitError::Detached)
        ));
    }

    #[test]
    fn test_file_label_joins_and_resets() {
        let mut label = FileUploadLabel::new();
        assert_eq!(label.label(), "Add file");

        label.set_files(["reference.jpg", "sketch.png"]);
        assert_eq!(label.label(), "reference.jpg, sketch.png");

        label.set_files(Vec::<&str>::new());
        assert_eq!(label.label(), "Add file");

        label.set_files(["only.pdf"]);
        label.reset();
        assert_eq!(label.label(), "Add file");
    }
}

//! Form schemas and validation.
//!
//! The contact and commission forms are structurally identical: required
//! fields, one of which must be a well-formed email, validated client-side
//! before anything is submitted. A [`FormSchema`] names the required
//! fields; [`FormSchema::validate`] returns a typed [`ValidatedForm`] or a
//! [`ValidationError`] whose display text is the blocking alert the host
//! shows.

pub mod handler;
pub mod submit;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use atelier_core::{Email, EmailError};

pub use handler::{FileUploadLabel, FormHandler};
pub use submit::{SimulatedSubmitter, Submitter};

/// Raw field values as collected from the host form, keyed by field name.
pub type FormData = BTreeMap<String, String>;

/// What a required field must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any non-blank text.
    Text,
    /// A well-formed email address.
    Email,
}

/// One required field of a form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name as it appears in the form data.
    pub name: &'static str,
    /// Required content kind.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A required text field.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    /// A required email field.
    #[must_use]
    pub const fn email(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Email,
        }
    }
}

/// A form's required fields.
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    /// Form name, used in logs and submission payloads.
    pub name: &'static str,
    /// Required fields. Fields outside this list pass through untouched.
    pub fields: &'static [FieldSpec],
}

/// Why form data failed validation.
///
/// The display text is user-facing: it is the message of the blocking
/// alert the host shows.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more required fields are blank or absent.
    #[error("Please fill in all required fields.")]
    MissingFields {
        /// Names of the offending fields.
        missing: Vec<&'static str>,
    },

    /// An email field does not hold a well-formed address.
    #[error("Please enter a valid email address.")]
    InvalidEmail {
        /// Name of the offending field.
        field: &'static str,
        #[source]
        source: EmailError,
    },
}

/// Form data that passed schema validation.
#[derive(Debug, Clone)]
pub struct ValidatedForm {
    /// Schema name the data validated against.
    pub form: &'static str,
    /// All submitted fields, trimmed; email fields lowercased.
    pub fields: BTreeMap<String, String>,
    /// The parsed email, when the schema requires one.
    pub email: Option<Email>,
    /// When validation succeeded.
    pub validated_at: DateTime<Utc>,
}

impl FormSchema {
    /// Validate raw form data against this schema.
    ///
    /// Whitespace-only values count as missing. Email fields are trimmed
    /// and lowercased before parsing. Fields not named by the schema are
    /// carried through trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingFields` if any required field is
    /// blank, then `ValidationError::InvalidEmail` if an email field fails
    /// to parse. Validation changes no state.
    pub fn validate(&self, data: &FormData) -> Result<ValidatedForm, ValidationError> {
        let missing: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|spec| {
                data.get(spec.name)
                    .is_none_or(|value| value.trim().is_empty())
            })
            .map(|spec| spec.name)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { missing });
        }

        let mut fields: BTreeMap<String, String> = data
            .iter()
            .map(|(name, value)| (name.clone(), value.trim().to_owned()))
            .collect();

        let mut email = None;
        for spec in self.fields {
            if spec.kind != FieldKind::Email {
                continue;
            }
            let Some(value) = data.get(spec.name) else {
                continue;
            };
            let normalized = value.trim().to_lowercase();
            let parsed = Email::parse(&normalized).map_err(|source| {
                ValidationError::InvalidEmail {
                    field: spec.name,
                    source,
                }
            })?;
            fields.insert(spec.name.to_owned(), normalized);
            email = Some(parsed);
        }

        Ok(ValidatedForm {
            form: self.name,
            fields,
            email,
            validated_at: Utc::now(),
        })
    }
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name"),
    FieldSpec::text("surname"),
    FieldSpec::email("email"),
    FieldSpec::text("message"),
];

/// The contact form: name, surname, email, message.
#[must_use]
pub const fn contact() -> FormSchema {
    FormSchema {
        name: "contact",
        fields: CONTACT_FIELDS,
    }
}

const COMMISSION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("fullname"),
    FieldSpec::email("email"),
    FieldSpec::text("address"),
    FieldSpec::text("size"),
    FieldSpec::text("description"),
];

/// The commission form: fullname, email, address, size, description.
#[must_use]
pub const fn commission() -> FormSchema {
    FormSchema {
        name: "commission",
        fields: COMMISSION_FIELDS,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn contact_data() -> FormData {
        FormData::from([
            ("name".to_owned(), "Ada".to_owned()),
            ("surname".to_owned(), "Rossi".to_owned()),
            ("email".to_owned(), " Ada.Rossi@Example.COM ".to_owned()),
            ("message".to_owned(), "I love the sacred hearts series.".to_owned()),
        ])
    }

    #[test]
    fn test_valid_contact_data() {
        let validated = contact().validate(&contact_data()).unwrap();
        assert_eq!(validated.form, "contact");
        assert_eq!(
            validated.fields.get("email").map(String::as_str),
            Some("ada.rossi@example.com")
        );
        assert_eq!(
            validated.email.as_ref().map(Email::as_str),
            Some("ada.rossi@example.com")
        );
    }

    #[test]
    fn test_blank_required_field_is_missing() {
        let mut data = contact_data();
        data.insert("message".to_owned(), "   ".to_owned());

        let err = contact().validate(&data).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields.");
        assert!(matches!(
            err,
            ValidationError::MissingFields { missing } if missing == vec!["message"]
        ));
    }

    #[test]
    fn test_absent_required_field_is_missing() {
        let mut data = contact_data();
        data.remove("surname");

        assert!(matches!(
            contact().validate(&data),
            Err(ValidationError::MissingFields { .. })
        ));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut data = contact_data();
        data.insert("email".to_owned(), "ada.rossi@example".to_owned());

        let err = contact().validate(&data).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn test_unlisted_fields_pass_through() {
        let mut data = contact_data();
        data.insert("phone".to_owned(), " +39 055 000000 ".to_owned());

        let validated = contact().validate(&data).unwrap();
        assert_eq!(
            validated.fields.get("phone").map(String::as_str),
            Some("+39 055 000000")
        );
    }

    #[test]
    fn test_commission_schema_fields() {
        let data = FormData::from([
            ("fullname".to_owned(), "Ada Rossi".to_owned()),
            ("email".to_owned(), "ada@example.com".to_owned()),
            ("address".to_owned(), "Via dei Serragli 1, Firenze".to_owned()),
            ("size".to_owned(), "60x80cm".to_owned()),
            ("description".to_owned(), "A portrait in the votive style.".to_owned()),
        ]);
        let validated = commission().validate(&data).unwrap();
        assert_eq!(validated.form, "commission");
        assert!(validated.email.is_some());
    }
}

//! Contact Form State
//!
//! Owns the three contact fields and the last set of validation errors.
//! Validation failures are returned as values, never raised.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose `something@something.something` shape check. Not RFC 5322.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();

fn email_shape() -> &'static Regex {
    EMAIL_SHAPE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::Email => "Email:",
            Field::Message => "Message:",
        }
    }
}

/// Field → error message, holding only the fields that failed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Payload handed on after a successful submit, values as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form fields plus the errors from the last submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Errors stored by the last `submit`
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Check every field against the current values. Does not touch the
    /// stored errors.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, NAME_REQUIRED);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, EMAIL_REQUIRED);
        } else if !email_shape().is_match(email) {
            errors.insert(Field::Email, EMAIL_INVALID);
        }

        if self.message.trim().is_empty() {
            errors.insert(Field::Message, MESSAGE_REQUIRED);
        }

        errors
    }

    /// Validate and, when clean, hand out the values and reset the form.
    ///
    /// On failure the fields stay as they are and the stored errors are
    /// replaced by the new set.
    pub fn submit(&mut self) -> Result<ContactSubmission, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            debug!("contact submit rejected: {} field error(s)", errors.len());
            self.errors = errors.clone();
            return Err(errors);
        }

        let submission = ContactSubmission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
        };
        self.errors = FieldErrors::new();
        info!("contact form accepted from {:?}", submission.email);
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, name);
        form.set(Field::Email, email);
        form.set(Field::Message, message);
        form
    }

    #[test]
    fn test_all_empty_reports_three_required() {
        let errors = form("", "", "").validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let errors = form("  ", "\t", " \n ").validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_bad_email_only() {
        let errors = form("Jo", "bad", "hi").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
        assert!(!errors.contains(Field::Name));
        assert!(!errors.contains(Field::Message));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(form("Jo", "a@b.co", "hi").validate().is_empty());
    }

    #[test]
    fn test_email_check_is_permissive() {
        for ok in ["a@b.c", "x@y.z.w", "weird!#@host.tld", "a@@b..c", "prefix a@b.c suffix"] {
            assert!(form("n", ok, "m").validate().is_empty(), "expected {ok:?} to pass");
        }
        for bad in ["a@b", "@b.c", "a@.c", "ab.c", "a @b.c"] {
            assert_eq!(
                form("n", bad, "m").validate().get(Field::Email),
                Some(EMAIL_INVALID),
                "expected {bad:?} to fail"
            );
        }
    }

    #[test]
    fn test_validate_does_not_store_errors() {
        let f = form("", "", "");
        let _ = f.validate();
        assert!(f.errors().is_empty());
    }

    #[test]
    fn test_submit_valid_resets_form() {
        let mut f = form(" Jo ", "a@b.co", "hi there");
        let submitted = f.submit().expect("valid form");
        assert_eq!(
            submitted,
            ContactSubmission {
                name: " Jo ".to_string(),
                email: "a@b.co".to_string(),
                message: "hi there".to_string(),
            }
        );
        assert_eq!(f, ContactForm::new());
    }

    #[test]
    fn test_submit_invalid_keeps_fields() {
        let mut f = form("Jo", "bad", "");
        let errors = f.submit().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(f.name, "Jo");
        assert_eq!(f.email, "bad");
        assert_eq!(f.message, "");
        assert_eq!(f.errors(), &errors);
        assert_eq!(f.error(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_errors_recomputed_wholesale() {
        let mut f = form("", "", "");
        f.submit().unwrap_err();
        assert_eq!(f.errors().len(), 3);

        f.set(Field::Name, "Jo");
        f.set(Field::Message, "hi");
        // Stored errors only change on the next submit
        assert_eq!(f.errors().len(), 3);

        let errors = f.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(f.errors().len(), 1);
        assert!(f.error(Field::Name).is_none());

        f.set(Field::Email, "jo@example.com");
        assert!(f.submit().is_ok());
        assert!(f.errors().is_empty());
    }

    #[test]
    fn test_errors_serialize_by_field_name() {
        let errors = form("", "bad", "x").validate();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Name is required", "email": "Email is invalid" })
        );
    }
}

//! Contact form: submission model, validation and the submission port.
//!
//! Validation is synchronous and reports every violated rule at once.
//! Submitting goes through [`ContactSubmitter`](submit::ContactSubmitter);
//! the shipped implementation only simulates delivery.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use uuid::Uuid;

#[cfg(feature = "web")]
pub mod submit;

#[cfg(feature = "web")]
pub use submit::{ContactSubmitter, SimulatedSubmitter};

/// Minimum trimmed length of the name.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum trimmed length of the subject.
pub const MIN_SUBJECT_CHARS: usize = 3;
/// Minimum trimmed length of the message.
pub const MIN_MESSAGE_CHARS: usize = 10;
/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+\-()]+$").expect("valid phone regex"));

/// A contact form as submitted. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactFormSubmission {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Optional phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Subject line
    pub subject: String,
    /// Optional service of interest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Message body
    pub message: String,
}

impl ContactFormSubmission {
    /// Phone number, treating blank input as absent.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }

    /// Service of interest, treating blank input as absent.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        non_blank(self.service.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Phone number
    Phone,
    /// Subject line
    Subject,
    /// Service of interest
    Service,
    /// Message body
    Message,
}

impl ContactField {
    /// All fields in form order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Service,
        Self::Message,
    ];

    /// Stable key used in JSON and form names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Service => "service",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field errors of one submission. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactErrors(BTreeMap<ContactField, String>);

impl ContactErrors {
    /// True when no rule was violated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it is invalid.
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// True if `field` is invalid.
    #[must_use]
    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: ContactField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for ContactErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Returns true if `email` looks like `local@domain.tld`.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if `phone` uses only digits, spaces and `+-()` and carries
/// at least ten digits.
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
        && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

fn too_short(value: &str, min_chars: usize) -> bool {
    value.trim().chars().count() < min_chars
}

/// Checks the field rules of the contact form.
///
/// Every rule is evaluated; the result lists all violations. The service of
/// interest is not checked here because the valid options come from the
/// content set (see [`ContactValidator`]).
#[must_use]
pub fn validate_contact_form(form: &ContactFormSubmission) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if too_short(&form.name, MIN_NAME_CHARS) {
        errors.insert(ContactField::Name, "Name must be at least 2 characters long");
    }
    if !validate_email(&form.email) {
        errors.insert(ContactField::Email, "Please enter a valid email address");
    }
    if form.phone().is_some_and(|phone| !validate_phone(phone)) {
        errors.insert(ContactField::Phone, "Please enter a valid phone number");
    }
    if too_short(&form.subject, MIN_SUBJECT_CHARS) {
        errors.insert(ContactField::Subject, "Subject must be at least 3 characters long");
    }
    if too_short(&form.message, MIN_MESSAGE_CHARS) {
        errors.insert(ContactField::Message, "Message must be at least 10 characters long");
    }

    errors
}

/// Contact form validator bound to a list of service options.
#[derive(Debug, Clone, Default)]
pub struct ContactValidator {
    service_options: Vec<String>,
}

impl ContactValidator {
    /// Creates a validator accepting `service_options` for the service field.
    #[must_use]
    pub fn new(service_options: Vec<String>) -> Self {
        Self { service_options }
    }

    /// Accepted service options.
    #[must_use]
    pub fn service_options(&self) -> &[String] {
        &self.service_options
    }

    /// Validates every field, including the service of interest.
    #[must_use]
    pub fn validate(&self, form: &ContactFormSubmission) -> ContactErrors {
        let mut errors = validate_contact_form(form);
        if let Some(service) = form.service() {
            if !self.service_options.iter().any(|option| option == service) {
                errors.insert(ContactField::Service, "Please choose a service from the list");
            }
        }
        errors
    }
}

/// Receipt for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    /// Receipt identifier
    pub id: Uuid,
    /// Acceptance time
    pub received_at: DateTime<Utc>,
}

impl Ack {
    /// Fresh receipt stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for Ack {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a submission was not accepted.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form failed validation
    #[error("Submission rejected: {0}")]
    Invalid(ContactErrors),

    /// The delivery collaborator could not take the submission
    #[error("Submission service unavailable: {message}")]
    Unavailable {
        /// Reason reported by the collaborator
        message: String,
    },
}

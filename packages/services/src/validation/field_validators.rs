use std::sync::LazyLock;

use models::{FieldName, FieldValues};
use regex::Regex;
use serde::Serialize;

use super::field_error::FieldError;

pub const NAME_MIN_LENGTH: usize = 1;
pub const SUBJECT_MIN_LENGTH: usize = 3;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// `local@domain.tld`, where every part is at least one character that is
/// neither whitespace nor `@`
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Static description of the rule attached to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    pub field: FieldName,
    pub min_length: usize,
    /// Whether whitespace is stripped before the length check
    pub trimmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_match: Option<FieldName>,
}

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_first_name(value: &str) -> Result<(), FieldError> {
        Self::validate_trimmed_length(value, NAME_MIN_LENGTH, FieldError::FirstNameRequired)
    }

    pub fn validate_last_name(value: &str) -> Result<(), FieldError> {
        Self::validate_trimmed_length(value, NAME_MIN_LENGTH, FieldError::LastNameRequired)
    }

    pub fn validate_email(email: &str) -> Result<(), FieldError> {
        if email.trim().is_empty() {
            return Err(FieldError::EmailRequired);
        }

        if !Self::is_valid_email(email) {
            return Err(FieldError::EmailInvalid);
        }

        Ok(())
    }

    pub fn validate_subject(value: &str) -> Result<(), FieldError> {
        Self::validate_trimmed_length(value, SUBJECT_MIN_LENGTH, FieldError::SubjectTooShort)
    }

    pub fn validate_message(value: &str) -> Result<(), FieldError> {
        Self::validate_trimmed_length(value, MESSAGE_MIN_LENGTH, FieldError::MessageTooShort)
    }

    /// Passwords are measured as typed; surrounding spaces count.
    pub fn validate_password(password: &str) -> Result<(), FieldError> {
        if password.is_empty() || password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(FieldError::PasswordTooShort);
        }
        Ok(())
    }

    pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
        if confirmation.is_empty() {
            return Err(FieldError::ConfirmPasswordRequired);
        }
        if !Self::passwords_match(password, confirmation) {
            return Err(FieldError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn passwords_match(password: &str, confirmation: &str) -> bool {
        password == confirmation
    }

    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Run the rule for `field` against a snapshot of the whole form
    pub fn validate_field(field: FieldName, values: &FieldValues) -> Result<(), FieldError> {
        let value = values.get(field);
        match field {
            FieldName::FirstName => Self::validate_first_name(value),
            FieldName::LastName => Self::validate_last_name(value),
            FieldName::Email => Self::validate_email(value),
            FieldName::Subject => Self::validate_subject(value),
            FieldName::Message => Self::validate_message(value),
            FieldName::Password => Self::validate_password(value),
            FieldName::ConfirmPassword => {
                Self::validate_password_confirmation(values.get(FieldName::Password), value)
            }
        }
    }

    pub fn describe(field: FieldName) -> FieldRule {
        let (min_length, trimmed) = match field {
            FieldName::FirstName | FieldName::LastName => (NAME_MIN_LENGTH, true),
            FieldName::Email => (1, true),
            FieldName::Subject => (SUBJECT_MIN_LENGTH, true),
            FieldName::Message => (MESSAGE_MIN_LENGTH, true),
            FieldName::Password => (PASSWORD_MIN_LENGTH, false),
            FieldName::ConfirmPassword => (1, false),
        };

        FieldRule {
            field,
            min_length,
            trimmed,
            pattern: (field == FieldName::Email).then_some(EMAIL_PATTERN),
            must_match: (field == FieldName::ConfirmPassword).then_some(FieldName::Password),
        }
    }

    fn validate_trimmed_length(value: &str, min: usize, error: FieldError) -> Result<(), FieldError> {
        if value.trim().chars().count() < min {
            return Err(error);
        }
        Ok(())
    }
}

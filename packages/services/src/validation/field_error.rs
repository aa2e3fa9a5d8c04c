use models::FieldName;
use std::fmt;

/// A single rule violation. The `Display` text is what the visitor sees next to
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// First name is blank
    FirstNameRequired,
    /// Last name is blank
    LastNameRequired,
    /// Email is blank
    EmailRequired,
    /// Email does not look like `local@domain.tld`
    EmailInvalid,
    /// Subject is shorter than three characters once trimmed
    SubjectTooShort,
    /// Message is shorter than ten characters once trimmed
    MessageTooShort,
    /// Password is missing or shorter than eight characters
    PasswordTooShort,
    /// Confirmation was left blank
    ConfirmPasswordRequired,
    /// Confirmation differs from the password
    PasswordMismatch,
}

impl FieldError {
    /// The field this error is reported against
    pub fn field(&self) -> FieldName {
        match self {
            FieldError::FirstNameRequired => FieldName::FirstName,
            FieldError::LastNameRequired => FieldName::LastName,
            FieldError::EmailRequired | FieldError::EmailInvalid => FieldName::Email,
            FieldError::SubjectTooShort => FieldName::Subject,
            FieldError::MessageTooShort => FieldName::Message,
            FieldError::PasswordTooShort => FieldName::Password,
            FieldError::ConfirmPasswordRequired | FieldError::PasswordMismatch => {
                FieldName::ConfirmPassword
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::FirstNameRequired =>
                write!(f, "First name is required and must be at least 1 character long."),
            FieldError::LastNameRequired =>
                write!(f, "Last name is required and must be at least 1 character long."),
            FieldError::EmailRequired =>
                write!(f, "Email is required."),
            FieldError::EmailInvalid =>
                write!(f, "Please enter a valid email address."),
            FieldError::SubjectTooShort =>
                write!(f, "Subject is required and must be at least 3 characters."),
            FieldError::MessageTooShort =>
                write!(f, "Message is required and must be at least 10 characters."),
            FieldError::PasswordTooShort =>
                write!(f, "Password is required and must be at least 8 characters long."),
            FieldError::ConfirmPasswordRequired =>
                write!(f, "Please confirm your password."),
            FieldError::PasswordMismatch =>
                write!(f, "Passwords do not match."),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_report_against_their_field() {
        assert_eq!(FieldError::EmailInvalid.field(), FieldName::Email);
        assert_eq!(FieldError::PasswordMismatch.field(), FieldName::ConfirmPassword);
        assert_eq!(FieldError::PasswordTooShort.field(), FieldName::Password);
    }

    #[test]
    fn test_email_messages_differ() {
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required.");
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address."
        );
    }
}

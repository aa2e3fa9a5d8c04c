use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of a form input.
///
/// The declaration order is the display order used everywhere a form is walked
/// field by field (validation, rendering, focus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// The name used for the input element and in serialized payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Id of the element that carries this field's inline error text
    pub fn error_element_id(&self) -> String {
        format!("{}Error", self.as_str())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError {
    pub name: String,
}

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {}", self.name)
    }
}

impl std::error::Error for UnknownFieldError {}

impl FromStr for FieldName {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError { name: s.to_string() })
    }
}

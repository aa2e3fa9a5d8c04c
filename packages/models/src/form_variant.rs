use crate::field::FieldName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two forms the site ships. They are never active on the same page and
/// each carries its own field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Generic contact form: names, email, subject and message
    #[default]
    Contact,
    /// Account form: names, email, password and its confirmation
    Registration,
}

impl FormVariant {
    pub const ALL: [FormVariant; 2] = [FormVariant::Contact, FormVariant::Registration];

    /// Fields of this form in display order
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            FormVariant::Contact => &[
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::Email,
                FieldName::Subject,
                FieldName::Message,
            ],
            FormVariant::Registration => &[
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::Email,
                FieldName::Password,
                FieldName::ConfirmPassword,
            ],
        }
    }

    pub fn has_field(&self, field: FieldName) -> bool {
        self.fields().contains(&field)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormVariant::Contact => "contact",
            FormVariant::Registration => "registration",
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormVariantError {
    pub name: String,
}

impl fmt::Display for UnknownFormVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form variant: {} (expected contact or registration)", self.name)
    }
}

impl std::error::Error for UnknownFormVariantError {}

impl FromStr for FormVariant {
    type Err = UnknownFormVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contact" => Ok(FormVariant::Contact),
            "registration" => Ok(FormVariant::Registration),
            _ => Err(UnknownFormVariantError { name: s.to_string() }),
        }
    }
}

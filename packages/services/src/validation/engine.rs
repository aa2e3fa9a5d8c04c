use models::{ErrorMap, FieldName, FieldValues, FormVariant};

use super::field_error::FieldError;
use super::field_validators::FieldValidator;

/// Runs every rule of one form against a snapshot of its values.
///
/// A pass never stops at the first failure: each field of the form is checked
/// in display order and every violation lands in the returned [`ErrorMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationEngine {
    variant: FormVariant,
}

impl ValidationEngine {
    pub fn new(variant: FormVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn validate(&self, values: &FieldValues) -> ErrorMap {
        let errors: ErrorMap = self
            .variant
            .fields()
            .iter()
            .filter_map(|field| FieldValidator::validate_field(*field, values).err())
            .map(|error| (error.field(), error.to_string()))
            .collect();

        tracing::debug!(form = %self.variant, errors = errors.len(), "validation pass");
        errors
    }

    pub fn is_valid(&self, values: &FieldValues) -> bool {
        self.validate(values).is_empty()
    }

    /// Live comparison of the two password fields.
    ///
    /// Returns `None` while either field is still empty, so no verdict is shown
    /// before the visitor has typed both. Otherwise `Some(None)` when they match
    /// and `Some(Some(PasswordMismatch))` when they differ.
    pub fn check_password_match(&self, values: &FieldValues) -> Option<Option<FieldError>> {
        if !self.variant.has_field(FieldName::ConfirmPassword) {
            return None;
        }

        let password = values.get(FieldName::Password);
        let confirmation = values.get(FieldName::ConfirmPassword);
        if password.is_empty() || confirmation.is_empty() {
            return None;
        }

        if FieldValidator::passwords_match(password, confirmation) {
            Some(None)
        } else {
            Some(Some(FieldError::PasswordMismatch))
        }
    }
}

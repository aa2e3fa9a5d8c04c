use models::{FieldName, FieldValues};

pub fn valid_contact_values() -> FieldValues {
    FieldValues::new()
        .with(FieldName::FirstName, "Jane")
        .with(FieldName::LastName, "Doe")
        .with(FieldName::Email, "jane.doe@example.com")
        .with(FieldName::Subject, "Project inquiry")
        .with(FieldName::Message, "I would like to talk about a project.")
}

pub fn valid_registration_values() -> FieldValues {
    FieldValues::new()
        .with(FieldName::FirstName, "Jane")
        .with(FieldName::LastName, "Doe")
        .with(FieldName::Email, "jane.doe@example.com")
        .with(FieldName::Password, "correct horse")
        .with(FieldName::ConfirmPassword, "correct horse")
}

use models::{FieldName, FieldValues, FormVariant};

use crate::bindings::FieldBindings;
use crate::memory_surface::InMemorySurface;
use crate::presenter::FormPresenter;
use crate::view::FormView;

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

/// A presenter over an in-memory page pre-filled with `values`
pub fn presenter_with(variant: FormVariant, values: &FieldValues) -> FormPresenter<InMemorySurface> {
    let bindings = FieldBindings::for_variant(variant);
    let surface = InMemorySurface::from_values(&bindings, values);
    FormPresenter::new(variant, FormView::new(surface, bindings))
}

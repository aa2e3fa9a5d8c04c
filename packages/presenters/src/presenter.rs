use models::{ErrorMap, FieldName, FieldValues, FormVariant};
use serde::Serialize;
use services::ValidationEngine;

use crate::surface::FormSurface;
use crate::view::FormView;

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed and the values went to the surface's transport
    Submitted(FieldValues),
    /// Nothing was submitted; the errors are on screen and `focused` holds the
    /// field that received focus
    Rejected {
        errors: ErrorMap,
        focused: Option<FieldName>,
    },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationData {
    pub values: FieldValues,
    pub errors: ErrorMap,
    pub is_valid: bool,
}

/// Coordinates the form: reads the view into the model, asks the engine for
/// a verdict and tells the view what to paint.
///
/// The presenter is the only path to submission, so the surface's own submit
/// action never fires by itself.
pub struct FormPresenter<S: FormSurface> {
    engine: ValidationEngine,
    view: FormView<S>,
    values: FieldValues,
    errors: ErrorMap,
}

impl<S: FormSurface> FormPresenter<S> {
    pub fn new(variant: FormVariant, view: FormView<S>) -> Self {
        Self {
            engine: ValidationEngine::new(variant),
            view,
            values: FieldValues::new(),
            errors: ErrorMap::new(),
        }
    }

    pub fn handle_submit_trigger(&mut self) -> SubmitOutcome {
        let form = self.engine.variant();

        self.view.clear_all_errors();
        self.values.merge(self.view.snapshot());
        self.errors = self.engine.validate(&self.values);

        if self.errors.is_empty() {
            self.view.submit(&self.values);
            tracing::info!(form = %form, "form submitted");
            return SubmitOutcome::Submitted(self.values.clone());
        }

        self.view.render(&self.errors);
        let focused = self.view.focus_first_invalid_field();
        tracing::warn!(
            form = %form,
            errors = self.errors.len(),
            focused = ?focused,
            "form rejected"
        );

        SubmitOutcome::Rejected {
            errors: self.errors.clone(),
            focused,
        }
    }

    /// Live check while the visitor types into either password field. Only the
    /// confirmation entry is touched, and only once both fields hold text.
    pub fn handle_field_change_trigger(&mut self) {
        self.values.merge(self.view.snapshot());

        match self.engine.check_password_match(&self.values) {
            Some(Some(error)) => {
                let message = error.to_string();
                self.view.show_error(FieldName::ConfirmPassword, &message);
                self.errors.insert(FieldName::ConfirmPassword, message);
            }
            Some(None) => {
                self.view.clear_error(FieldName::ConfirmPassword);
                self.errors.remove(FieldName::ConfirmPassword);
            }
            None => {}
        }
    }

    /// Current model state with validity recomputed from the stored values
    pub fn presentation_data(&self) -> PresentationData {
        let errors = self.engine.validate(&self.values);
        PresentationData {
            values: self.values.clone(),
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.engine.variant()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the last full pass, as adjusted by the live password check
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn view(&self) -> &FormView<S> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut FormView<S> {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::FieldBindings;
    use crate::surface::MockFormSurface;
    use crate::test_helpers::*;

    #[test]
    fn test_valid_contact_form_is_submitted() {
        let values = valid_contact_values();
        let mut presenter = presenter_with(FormVariant::Contact, &values);

        let outcome = presenter.handle_submit_trigger();
        assert_eq!(outcome, SubmitOutcome::Submitted(values.clone()));

        let surface = presenter.view().surface();
        assert_eq!(surface.submissions(), &[values]);
        assert_eq!(surface.focused(), None);
        assert_eq!(surface.invalid_inputs().count(), 0);
    }

    #[test]
    fn test_invalid_form_renders_errors_and_focuses_first() {
        let values = valid_contact_values()
            .with(FieldName::FirstName, "")
            .with(FieldName::Subject, "Hi");
        let mut presenter = presenter_with(FormVariant::Contact, &values);

        let outcome = presenter.handle_submit_trigger();
        let SubmitOutcome::Rejected { errors, focused } = outcome else {
            panic!("expected the form to be rejected");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(focused, Some(FieldName::FirstName));

        let surface = presenter.view().surface();
        assert!(surface.submissions().is_empty());
        assert_eq!(surface.focused(), Some("firstName"));
        assert_eq!(
            surface.text("subjectError"),
            "Subject is required and must be at least 3 characters."
        );
        assert_eq!(surface.attribute("subjectError", "aria-live"), Some("polite"));
        assert!(surface.is_invalid("subject"));
        assert!(!surface.is_invalid("email"));
    }

    #[test]
    fn test_resubmit_clears_stale_errors() {
        let values = valid_contact_values().with(FieldName::Email, "not-an-email");
        let mut presenter = presenter_with(FormVariant::Contact, &values);
        assert!(!presenter.handle_submit_trigger().is_submitted());
        assert!(presenter.view().surface().is_invalid("email"));

        presenter
            .view_mut()
            .surface_mut()
            .type_into("email", "jane@example.com");
        assert!(presenter.handle_submit_trigger().is_submitted());

        let surface = presenter.view().surface();
        assert_eq!(surface.text("emailError"), "");
        assert!(!surface.is_invalid("email"));
        assert!(presenter.errors().is_empty());
    }

    #[test]
    fn test_model_takes_latest_typed_values() {
        let values = valid_registration_values().with(FieldName::Password, "abcdefgh");
        let mut presenter = presenter_with(FormVariant::Registration, &values);

        presenter.handle_field_change_trigger();
        assert_eq!(presenter.values().get(FieldName::Password), "abcdefgh");
        assert_eq!(presenter.values().get(FieldName::FirstName), "Jane");

        presenter
            .view_mut()
            .surface_mut()
            .type_into("password", "new password");
        presenter.handle_field_change_trigger();
        assert_eq!(presenter.values().get(FieldName::Password), "new password");
        assert_eq!(presenter.values().get(FieldName::Email), "jane.doe@example.com");
        assert_eq!(presenter.values().len(), 5);
    }

    #[test]
    fn test_submitted_values_keep_whitespace() {
        let values = valid_contact_values().with(FieldName::Subject, "  Hello  ");
        let mut presenter = presenter_with(FormVariant::Contact, &values);

        let SubmitOutcome::Submitted(submitted) = presenter.handle_submit_trigger() else {
            panic!("expected the form to be submitted");
        };
        assert_eq!(submitted.get(FieldName::Subject), "  Hello  ");
    }

    #[test]
    fn test_password_change_sets_and_clears_mismatch() {
        let values = valid_registration_values()
            .with(FieldName::Password, "abcdefgh")
            .with(FieldName::ConfirmPassword, "abcdefg9");
        let mut presenter = presenter_with(FormVariant::Registration, &values);

        presenter.handle_field_change_trigger();
        assert_eq!(
            presenter.errors().get(FieldName::ConfirmPassword),
            Some("Passwords do not match.")
        );
        assert_eq!(
            presenter.view().surface().text("confirmPasswordError"),
            "Passwords do not match."
        );
        assert!(presenter.view().surface().is_invalid("confirmPassword"));

        presenter
            .view_mut()
            .surface_mut()
            .type_into("confirmPassword", "abcdefgh");
        presenter.handle_field_change_trigger();
        assert!(!presenter.errors().contains(FieldName::ConfirmPassword));
        assert_eq!(presenter.view().surface().text("confirmPasswordError"), "");
        assert!(!presenter.view().surface().is_invalid("confirmPassword"));
    }

    #[test]
    fn test_password_change_waits_for_both_fields() {
        let values = FieldValues::new().with(FieldName::Password, "abcdefgh");
        let mut presenter = presenter_with(FormVariant::Registration, &values);

        presenter.handle_field_change_trigger();
        assert!(presenter.errors().is_empty());
        assert_eq!(presenter.view().surface().text("confirmPasswordError"), "");
    }

    #[test]
    fn test_password_change_leaves_other_errors_alone() {
        let values = valid_registration_values().with(FieldName::Email, "");
        let mut presenter = presenter_with(FormVariant::Registration, &values);
        presenter.handle_submit_trigger();
        assert!(presenter.errors().contains(FieldName::Email));

        presenter
            .view_mut()
            .surface_mut()
            .type_into("confirmPassword", "something else");
        presenter.handle_field_change_trigger();

        assert!(presenter.errors().contains(FieldName::Email));
        assert!(presenter.errors().contains(FieldName::ConfirmPassword));
        assert_eq!(presenter.view().surface().text("emailError"), "Email is required.");
    }

    #[test]
    fn test_valid_submit_clears_then_submits_once() {
        let mut surface = MockFormSurface::new();
        surface
            .expect_set_text()
            .withf(|_, text| text.is_empty())
            .times(5)
            .return_const(());
        surface.expect_set_invalid().withf(|_, invalid| !*invalid).return_const(());
        surface.expect_read_input().returning(|id| {
            let values = valid_registration_values();
            id.parse::<FieldName>().ok().map(|field| values.get(field).to_string())
        });
        surface
            .expect_submit()
            .withf(|values| values == &valid_registration_values())
            .times(1)
            .return_const(());
        surface.expect_focus().never();

        let view = FormView::new(surface, FieldBindings::for_variant(FormVariant::Registration));
        let mut presenter = FormPresenter::new(FormVariant::Registration, view);
        assert!(presenter.handle_submit_trigger().is_submitted());
    }

    #[test]
    fn test_rejected_submit_never_reaches_transport() {
        let mut surface = MockFormSurface::new();
        surface.expect_read_input().returning(|_| None);
        surface.expect_set_text().return_const(());
        surface.expect_set_attribute().return_const(());
        surface.expect_set_invalid().return_const(());
        surface
            .expect_focus()
            .withf(|id| id == "firstName")
            .times(1)
            .return_const(());
        surface.expect_submit().never();

        let view = FormView::new(surface, FieldBindings::for_variant(FormVariant::Contact));
        let mut presenter = FormPresenter::new(FormVariant::Contact, view);

        let SubmitOutcome::Rejected { errors, .. } = presenter.handle_submit_trigger() else {
            panic!("expected the form to be rejected");
        };
        let fields: Vec<FieldName> = errors.fields().collect();
        assert_eq!(fields, FormVariant::Contact.fields().to_vec());
    }

    #[test]
    fn test_presentation_data() {
        let values = valid_registration_values();
        let mut presenter = presenter_with(FormVariant::Registration, &values);
        presenter.handle_submit_trigger();

        let data = presenter.presentation_data();
        assert!(data.is_valid);
        assert_eq!(data.values, values);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["values"]["firstName"], "Jane");
    }
}

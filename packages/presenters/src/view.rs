use models::{ErrorMap, FieldName, FieldValues};

use crate::bindings::FieldBindings;
use crate::surface::FormSurface;

/// Paints an already computed [`ErrorMap`] onto a [`FormSurface`].
///
/// The view keeps a copy of what is currently on screen so it can answer
/// "which field is the first one showing an error" without asking the
/// surface.
pub struct FormView<S: FormSurface> {
    surface: S,
    bindings: FieldBindings,
    rendered: ErrorMap,
}

impl<S: FormSurface> FormView<S> {
    pub fn new(surface: S, bindings: FieldBindings) -> Self {
        Self {
            surface,
            bindings,
            rendered: ErrorMap::new(),
        }
    }

    /// Read every bound input. Missing inputs read as empty strings.
    pub fn snapshot(&self) -> FieldValues {
        self.bindings
            .iter()
            .map(|(field, binding)| {
                let value = self.surface.read_input(&binding.input_id).unwrap_or_default();
                (field, value)
            })
            .collect()
    }

    pub fn show_error(&mut self, field: FieldName, message: &str) {
        let Some(binding) = self.bindings.get(field) else {
            tracing::warn!(field = %field, "no element bound for error message");
            return;
        };

        self.surface.set_text(&binding.error_id, message);
        self.surface.set_attribute(&binding.error_id, "aria-live", "polite");
        self.surface.set_invalid(&binding.input_id, true);
        self.rendered.insert(field, message);
    }

    pub fn clear_error(&mut self, field: FieldName) {
        let Some(binding) = self.bindings.get(field) else {
            return;
        };

        self.surface.set_text(&binding.error_id, "");
        self.surface.set_invalid(&binding.input_id, false);
        self.rendered.remove(field);
    }

    pub fn clear_all_errors(&mut self) {
        for (_, binding) in self.bindings.iter() {
            self.surface.set_text(&binding.error_id, "");
            self.surface.set_invalid(&binding.input_id, false);
        }
        self.rendered = ErrorMap::new();
    }

    pub fn render(&mut self, errors: &ErrorMap) {
        for (field, message) in errors.iter() {
            self.show_error(field, message);
        }
    }

    /// First bound field, in form order, whose rendered message is not empty
    pub fn first_invalid_field(&self) -> Option<FieldName> {
        self.bindings
            .fields()
            .find(|field| self.rendered.get(*field).is_some_and(|message| !message.is_empty()))
    }

    pub fn focus_first_invalid_field(&mut self) -> Option<FieldName> {
        let field = self.first_invalid_field()?;
        let binding = self.bindings.get(field)?;
        self.surface.focus(&binding.input_id);
        Some(field)
    }

    pub fn submit(&mut self, values: &FieldValues) {
        self.surface.submit(values);
    }

    /// Messages currently shown on the surface
    pub fn rendered_errors(&self) -> &ErrorMap {
        &self.rendered
    }

    pub fn bindings(&self) -> &FieldBindings {
        &self.bindings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

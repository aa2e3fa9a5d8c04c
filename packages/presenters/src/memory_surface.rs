use std::collections::{BTreeSet, HashMap};

use models::FieldValues;

use crate::bindings::FieldBindings;
use crate::surface::FormSurface;

/// A form surface held entirely in memory.
///
/// Used by the command line driver to run a submission without a browser, and
/// by tests that want to inspect the painted state afterwards.
#[derive(Debug, Default, Clone)]
pub struct InMemorySurface {
    inputs: HashMap<String, String>,
    texts: HashMap<String, String>,
    attributes: HashMap<(String, String), String>,
    invalid: BTreeSet<String>,
    focused: Option<String>,
    submissions: Vec<FieldValues>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the inputs named by `bindings` from `values`
    pub fn from_values(bindings: &FieldBindings, values: &FieldValues) -> Self {
        bindings
            .iter()
            .filter(|(field, _)| values.contains(*field))
            .fold(Self::new(), |surface, (field, binding)| {
                surface.with_input(&binding.input_id, values.get(field))
            })
    }

    pub fn with_input(mut self, input_id: &str, value: &str) -> Self {
        self.type_into(input_id, value);
        self
    }

    /// Replace the content of an input, as a visitor typing would
    pub fn type_into(&mut self, input_id: &str, value: &str) {
        self.inputs.insert(input_id.to_string(), value.to_string());
    }

    /// Text content of an element, empty when never set
    pub fn text(&self, element_id: &str) -> &str {
        self.texts.get(element_id).map(String::as_str).unwrap_or("")
    }

    pub fn attribute(&self, element_id: &str, name: &str) -> Option<&str> {
        self.attributes
            .get(&(element_id.to_string(), name.to_string()))
            .map(String::as_str)
    }

    pub fn is_invalid(&self, input_id: &str) -> bool {
        self.invalid.contains(input_id)
    }

    pub fn invalid_inputs(&self) -> impl Iterator<Item = &str> {
        self.invalid.iter().map(String::as_str)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn submissions(&self) -> &[FieldValues] {
        &self.submissions
    }
}

impl FormSurface for InMemorySurface {
    fn read_input(&self, input_id: &str) -> Option<String> {
        self.inputs.get(input_id).cloned()
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        self.texts.insert(element_id.to_string(), text.to_string());
    }

    fn set_attribute(&mut self, element_id: &str, name: &str, value: &str) {
        self.attributes
            .insert((element_id.to_string(), name.to_string()), value.to_string());
    }

    fn set_invalid(&mut self, input_id: &str, invalid: bool) {
        if invalid {
            self.invalid.insert(input_id.to_string());
        } else {
            self.invalid.remove(input_id);
        }
    }

    fn focus(&mut self, element_id: &str) {
        self.focused = Some(element_id.to_string());
    }

    fn submit(&mut self, values: &FieldValues) {
        self.submissions.push(values.clone());
    }
}

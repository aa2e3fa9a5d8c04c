use models::{FieldName, FormVariant};

/// Element ids for one field: the input the visitor types into and the
/// element that shows its error text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub input_id: String,
    pub error_id: String,
}

impl FieldBinding {
    pub fn new(input_id: impl Into<String>, error_id: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
            error_id: error_id.into(),
        }
    }

    /// `<field>` for the input and `<field>Error` for the message
    pub fn for_field(field: FieldName) -> Self {
        Self::new(field.as_str(), field.error_element_id())
    }
}

/// Static field to element table, built once when the form is set up.
/// Order of insertion is the order fields are walked in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBindings {
    bindings: Vec<(FieldName, FieldBinding)>,
}

impl FieldBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_variant(variant: FormVariant) -> Self {
        variant
            .fields()
            .iter()
            .fold(Self::new(), |bindings, field| {
                bindings.bind(*field, FieldBinding::for_field(*field))
            })
    }

    /// Bind `field`, replacing an existing binding in place
    pub fn bind(mut self, field: FieldName, binding: FieldBinding) -> Self {
        match self.bindings.iter_mut().find(|(bound, _)| *bound == field) {
            Some((_, existing)) => *existing = binding,
            None => self.bindings.push((field, binding)),
        }
        self
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldBinding> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == field)
            .map(|(_, binding)| binding)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.bindings.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldBinding)> {
        self.bindings.iter().map(|(field, binding)| (*field, binding))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let bindings = FieldBindings::for_variant(FormVariant::Registration);
        let confirm = bindings.get(FieldName::ConfirmPassword).unwrap();
        assert_eq!(confirm.input_id, "confirmPassword");
        assert_eq!(confirm.error_id, "confirmPasswordError");
        assert!(bindings.get(FieldName::Subject).is_none());
    }

    #[test]
    fn test_order_follows_variant() {
        let bindings = FieldBindings::for_variant(FormVariant::Contact);
        let fields: Vec<FieldName> = bindings.fields().collect();
        assert_eq!(fields, FormVariant::Contact.fields().to_vec());
    }

    #[test]
    fn test_rebind_keeps_position() {
        let bindings = FieldBindings::for_variant(FormVariant::Contact)
            .bind(FieldName::LastName, FieldBinding::new("surname", "surnameHint"));

        assert_eq!(bindings.len(), 5);
        assert_eq!(bindings.fields().nth(1), Some(FieldName::LastName));
        assert_eq!(bindings.get(FieldName::LastName).unwrap().input_id, "surname");
    }
}

use models::FieldValues;

/// The page a form lives on, addressed by element id.
///
/// Implementations wrap whatever actually holds the inputs (a browser DOM, a
/// test double, the in-memory surface used by the CLI). Nothing here decides
/// validity; the surface only reads and paints.
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface {
    /// Current value of an input, `None` when the element does not exist
    fn read_input(&self, input_id: &str) -> Option<String>;

    fn set_text(&mut self, element_id: &str, text: &str);

    fn set_attribute(&mut self, element_id: &str, name: &str, value: &str);

    /// Add or remove the invalid marker (the `error` class) on an input
    fn set_invalid(&mut self, input_id: &str, invalid: bool);

    fn focus(&mut self, element_id: &str);

    /// Hand the collected values to the transport behind the form
    fn submit(&mut self, values: &FieldValues);
}

use crate::field::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current snapshot of form input strings keyed by field.
///
/// Values are kept exactly as typed; trimming only ever happens inside the
/// checks that read them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<FieldName, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Value of `field`, or the empty string when it was never set
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Overlay `other` on top of the current values; fields present in both take
    /// the value from `other`
    pub fn merge(&mut self, other: FieldValues) {
        self.values.extend(other.values);
    }

    /// Drop every current value and take `other` wholesale
    pub fn replace(&mut self, other: FieldValues) {
        self.values = other.values;
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

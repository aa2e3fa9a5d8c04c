pub mod error_map;
pub mod field;
pub mod field_values;
pub mod form_variant;

pub mod prelude {
    pub use crate::error_map::ErrorMap;
    pub use crate::field::{FieldName, UnknownFieldError};
    pub use crate::field_values::FieldValues;
    pub use crate::form_variant::{FormVariant, UnknownFormVariantError};
}

pub use prelude::*;

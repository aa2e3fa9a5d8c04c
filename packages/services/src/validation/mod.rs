pub mod engine;
pub mod field_error;
pub mod field_validators;

// Re-export common types and functions
pub use engine::ValidationEngine;
pub use field_error::FieldError;
pub use field_validators::{FieldRule, FieldValidator};

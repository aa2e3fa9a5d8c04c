pub mod bindings;
pub mod memory_surface;
pub mod presenter;
pub mod surface;
pub mod view;

#[cfg(test)]
pub mod test_helpers;

pub use bindings::{FieldBinding, FieldBindings};
pub use memory_surface::InMemorySurface;
pub use presenter::{FormPresenter, PresentationData, SubmitOutcome};
pub use surface::FormSurface;
pub use view::FormView;

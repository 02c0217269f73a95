// ABOUTME: UI components for the stepper form - field renderer, step content, layout and help

pub mod form_field;
pub mod help;
pub mod layout;
pub mod palette;
pub mod step_content;

pub use form_field::{FieldProps, FormFieldComponent};
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use palette::Palette;
pub use step_content::{field_spec, FieldKind, FieldSpec, StepContent};

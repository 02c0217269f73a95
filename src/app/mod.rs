// ABOUTME: Main application structure and state management for the form stepper

pub mod events;
pub mod state;
pub mod step;
pub mod store;
pub mod validation;

pub use events::{AppEvent, EventHandler};
pub use state::{App, AppState, StateOptions};
pub use step::StepKind;
pub use store::FormStore;

// ABOUTME: Core data models for the internship form - applicant record, submissions, display prefs

pub mod display;
pub mod form;
pub mod submission;

pub use display::{Theme, ViewMode};
pub use form::{CustomField, CustomFieldType, FieldErrors, FieldKey, FixedField, FormData, FormPatch};
pub use submission::{SubmittedRecord, DEFAULT_SHARE_DOMAIN, FORM_ID_LIMIT};

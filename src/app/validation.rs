// ABOUTME: Per-step validation of the applicant record
// Built-in fields are checked only on their own step; custom fields on every pass

use super::step::StepKind;
use crate::models::{FieldErrors, FieldKey, FixedField, FormData};
use lazy_static::lazy_static;
use regex::Regex;

/// Message used when a custom field has no stored error text
pub const CUSTOM_FIELD_FALLBACK_MESSAGE: &str = "This field is required";

lazy_static! {
    // local@domain.tld with no whitespace and a single "@"
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    static ref PHONE_REGEX: Regex = Regex::new(r"^\d{10}$").unwrap();
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Exactly ten ASCII digits
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value) && value.is_ascii()
}

fn required_message(field: FixedField) -> &'static str {
    match field {
        FixedField::FirstName => "First Name is required",
        FixedField::LastName => "Last Name is required",
        FixedField::Email => "Email is required",
        FixedField::Phone => "Phone Number is required",
        FixedField::PrevInternExperience => "Previous Experience is required",
        FixedField::InternshipDuration => "Internship Duration is required",
        FixedField::AboutYourself => "About Yourself is required",
    }
}

/// Check one built-in field, returning its error message on failure
pub fn check_field(field: FixedField, value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(required_message(field));
    }

    match field {
        FixedField::Email if !is_valid_email(value) => Some("Invalid email address"),
        FixedField::Phone if !is_valid_phone(value) => Some("Phone Number must be 10 digits"),
        _ => None,
    }
}

/// Validate `step` plus every custom field, returning the full errors map
pub fn validate_step(step: StepKind, data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in step.fields() {
        if let Some(message) = check_field(*field, data.value(*field)) {
            errors.insert(FieldKey::Fixed(*field), message.to_string());
        }
    }

    for (index, custom) in data.fields.iter().enumerate() {
        if custom.value.trim().is_empty() {
            let message = if custom.error_message.is_empty() {
                CUSTOM_FIELD_FALLBACK_MESSAGE.to_string()
            } else {
                custom.error_message.clone()
            };
            errors.insert(FieldKey::Dynamic(index), message);
        }
    }

    errors
}

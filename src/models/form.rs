// ABOUTME: Applicant form record, custom fields, partial updates and field keys

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Prefix of the error key used for custom fields (`dynamicField<index>`)
pub const DYNAMIC_FIELD_PREFIX: &str = "dynamicField";

/// The built-in applicant questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixedField {
    FirstName,
    LastName,
    Email,
    Phone,
    PrevInternExperience,
    InternshipDuration,
    AboutYourself,
}

impl FixedField {
    pub fn all() -> &'static [FixedField] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Phone,
            Self::PrevInternExperience,
            Self::InternshipDuration,
            Self::AboutYourself,
        ]
    }

    /// Name used in the persisted JSON and in the errors map
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PrevInternExperience => "prevInternExperience",
            Self::InternshipDuration => "internshipDuration",
            Self::AboutYourself => "aboutYourself",
        }
    }
}

/// Key of an entry in the errors map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Fixed(FixedField),
    /// Custom field at this position in `FormData::fields`
    Dynamic(usize),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(field) => f.write_str(field.name()),
            Self::Dynamic(index) => write!(f, "{DYNAMIC_FIELD_PREFIX}{index}"),
        }
    }
}

/// Validation messages keyed by field
pub type FieldErrors = BTreeMap<FieldKey, String>;

/// Input kind of a custom field; only plain text is offered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldType {
    #[default]
    Text,
}

/// A question added by the applicant on the final step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    pub help_text: String,
    pub error_message: String,
}

impl CustomField {
    pub fn new(
        label: impl Into<String>,
        help_text: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            field_type: CustomFieldType::Text,
            help_text: help_text.into(),
            error_message: error_message.into(),
        }
    }
}

/// The working applicant record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub prev_intern_experience: String,
    pub internship_duration: String,
    pub about_yourself: String,
    pub fields: Vec<CustomField>,
}

impl FormData {
    pub fn value(&self, field: FixedField) -> &str {
        match field {
            FixedField::FirstName => &self.first_name,
            FixedField::LastName => &self.last_name,
            FixedField::Email => &self.email,
            FixedField::Phone => &self.phone,
            FixedField::PrevInternExperience => &self.prev_intern_experience,
            FixedField::InternshipDuration => &self.internship_duration,
            FixedField::AboutYourself => &self.about_yourself,
        }
    }

    fn value_mut(&mut self, field: FixedField) -> &mut String {
        match field {
            FixedField::FirstName => &mut self.first_name,
            FixedField::LastName => &mut self.last_name,
            FixedField::Email => &mut self.email,
            FixedField::Phone => &mut self.phone,
            FixedField::PrevInternExperience => &mut self.prev_intern_experience,
            FixedField::InternshipDuration => &mut self.internship_duration,
            FixedField::AboutYourself => &mut self.about_yourself,
        }
    }

    /// Shallow-merge a patch: provided values overwrite, `fields` is replaced whole
    pub fn apply(&mut self, patch: FormPatch) {
        for (field, value) in patch.values {
            *self.value_mut(field) = value;
        }
        if let Some(fields) = patch.fields {
            self.fields = fields;
        }
    }
}

/// A partial update of `FormData`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    values: BTreeMap<FixedField, String>,
    fields: Option<Vec<CustomField>>,
}

impl FormPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that sets a single built-in field
    pub fn field(field: FixedField, value: impl Into<String>) -> Self {
        Self::new().with(field, value)
    }

    /// Patch that replaces the custom field list
    pub fn fields(fields: Vec<CustomField>) -> Self {
        Self {
            values: BTreeMap::new(),
            fields: Some(fields),
        }
    }

    pub fn with(mut self, field: FixedField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }
}

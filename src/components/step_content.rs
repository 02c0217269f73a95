// ABOUTME: Step content resolver - the fixed questions shown on each step of the form

use super::form_field::FieldProps;
use crate::app::step::StepKind;
use crate::models::{FieldErrors, FieldKey, FixedField, FormData, Theme};

/// Control used to edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select,
}

impl FieldKind {
    /// HTML-style input type name, shown next to single-line inputs
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::TextArea => "textarea",
            Self::Select => "select",
        }
    }
}

/// Static presentation of a built-in question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
    pub help_text: Option<&'static str>,
    pub options: &'static [&'static str],
}

pub fn field_spec(field: FixedField) -> FieldSpec {
    match field {
        FixedField::FirstName => FieldSpec {
            label: "First Name",
            kind: FieldKind::Text,
            help_text: Some("Enter your first name"),
            options: &[],
        },
        FixedField::LastName => FieldSpec {
            label: "Last Name",
            kind: FieldKind::Text,
            help_text: Some("Enter your last name"),
            options: &[],
        },
        FixedField::Email => FieldSpec {
            label: "Email",
            kind: FieldKind::Email,
            help_text: Some("Enter your email id"),
            options: &[],
        },
        FixedField::Phone => FieldSpec {
            label: "Phone Number",
            kind: FieldKind::Tel,
            help_text: Some("Enter your 10 digit mobile no"),
            options: &[],
        },
        FixedField::PrevInternExperience => FieldSpec {
            label: "Previous Internship Experience",
            kind: FieldKind::Select,
            help_text: Some("Have you done any previous internship?"),
            options: &["Yes", "No"],
        },
        FixedField::InternshipDuration => FieldSpec {
            label: "How Many Months You Want to Intern?",
            kind: FieldKind::Select,
            help_text: Some("Choose the number of months you wish to intern."),
            options: &["2", "6"],
        },
        FixedField::AboutYourself => FieldSpec {
            label: "About Yourself",
            kind: FieldKind::TextArea,
            help_text: None,
            options: &[],
        },
    }
}

pub struct StepContent;

impl StepContent {
    /// Fields for the step at `index`; empty for an index past the last step
    pub fn resolve<'a>(
        index: usize,
        data: &'a FormData,
        errors: &'a FieldErrors,
        theme: Theme,
    ) -> Vec<FieldProps<'a>> {
        StepKind::from_index(index)
            .map(|step| Self::resolve_step(step, data, errors, theme))
            .unwrap_or_default()
    }

    pub fn resolve_step<'a>(
        step: StepKind,
        data: &'a FormData,
        errors: &'a FieldErrors,
        theme: Theme,
    ) -> Vec<FieldProps<'a>> {
        step.fields()
            .iter()
            .map(|field| {
                let spec = field_spec(*field);
                let key = FieldKey::Fixed(*field);
                FieldProps {
                    key,
                    label: spec.label,
                    kind: spec.kind,
                    value: data.value(*field),
                    error: errors.get(&key).map(String::as_str),
                    required: true,
                    help_text: spec.help_text,
                    options: spec.options,
                    theme,
                    focused: false,
                }
            })
            .collect()
    }

    /// Custom fields render on every step, after the built-in ones
    pub fn resolve_custom<'a>(
        data: &'a FormData,
        errors: &'a FieldErrors,
        theme: Theme,
    ) -> Vec<FieldProps<'a>> {
        data.fields
            .iter()
            .enumerate()
            .map(|(index, custom)| {
                let key = FieldKey::Dynamic(index);
                FieldProps {
                    key,
                    label: &custom.label,
                    kind: FieldKind::Text,
                    value: &custom.value,
                    error: errors.get(&key).map(String::as_str),
                    required: false,
                    help_text: Some(custom.help_text.as_str()).filter(|h| !h.is_empty()),
                    options: &[],
                    theme,
                    focused: false,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomField;
    use pretty_assertions::assert_eq;

    fn labels(props: &[FieldProps<'_>]) -> Vec<String> {
        props.iter().map(|p| p.label.to_string()).collect()
    }

    #[test]
    fn test_each_step_resolves_its_fields() {
        let data = FormData::default();
        let errors = FieldErrors::new();

        assert_eq!(
            labels(&StepContent::resolve(0, &data, &errors, Theme::Light)),
            vec!["First Name", "Last Name", "Email", "Phone Number"]
        );
        assert_eq!(
            labels(&StepContent::resolve(1, &data, &errors, Theme::Light)),
            vec!["Previous Internship Experience", "How Many Months You Want to Intern?"]
        );
        assert_eq!(
            labels(&StepContent::resolve(2, &data, &errors, Theme::Light)),
            vec!["About Yourself"]
        );
        assert!(StepContent::resolve(3, &data, &errors, Theme::Light).is_empty());
    }

    #[test]
    fn test_props_carry_values_errors_and_kinds() {
        let data = FormData {
            email: "ada@example".to_string(),
            ..Default::default()
        };
        let mut errors = FieldErrors::new();
        errors.insert(FieldKey::Fixed(FixedField::Email), "Invalid email address".to_string());

        let props = StepContent::resolve(0, &data, &errors, Theme::Dark);
        let email = &props[2];

        assert_eq!(email.key, FieldKey::Fixed(FixedField::Email));
        assert_eq!(email.kind, FieldKind::Email);
        assert_eq!(email.value, "ada@example");
        assert_eq!(email.error, Some("Invalid email address"));
        assert_eq!(email.theme, Theme::Dark);
        assert!(props.iter().all(|p| p.required));
        assert!(props[0].error.is_none());
    }

    #[test]
    fn test_select_options_keep_order() {
        assert_eq!(field_spec(FixedField::PrevInternExperience).options, &["Yes", "No"]);
        assert_eq!(field_spec(FixedField::InternshipDuration).options, &["2", "6"]);
    }

    #[test]
    fn test_custom_fields_use_dynamic_keys() {
        let mut data = FormData::default();
        data.fields.push(CustomField::new("GitHub", "Your handle", "Handle is required"));
        let mut errors = FieldErrors::new();
        errors.insert(FieldKey::Dynamic(0), "Handle is required".to_string());

        let props = StepContent::resolve_custom(&data, &errors, Theme::Light);

        assert_eq!(props.len(), 1);
        assert_eq!(props[0].key, FieldKey::Dynamic(0));
        assert_eq!(props[0].help_text, Some("Your handle"));
        assert_eq!(props[0].error, Some("Handle is required"));
    }
}

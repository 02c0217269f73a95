// ABOUTME: Stepper controller - navigation, validation, custom fields, submission and display state
// Owns the form store and the storage keys for step index, theme and submissions

use super::step::StepKind;
use super::store::FormStore;
use super::validation;
use crate::components::step_content::{field_spec, FieldKind};
use crate::models::{
    submission, CustomField, FieldErrors, FixedField, FormData, FormPatch, SubmittedRecord, Theme,
    ViewMode, DEFAULT_SHARE_DOMAIN,
};
use crate::storage::{self, keys, Storage};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Settings the controller takes from configuration
#[derive(Debug, Clone)]
pub struct StateOptions {
    pub share_domain: String,
    pub view_mode: ViewMode,
}

impl Default for StateOptions {
    fn default() -> Self {
        Self {
            share_domain: DEFAULT_SHARE_DOMAIN.to_string(),
            view_mode: ViewMode::default(),
        }
    }
}

/// Inputs of the add-field mini-form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftInput {
    Label,
    HelpText,
    ErrorMessage,
}

impl DraftInput {
    pub fn all() -> &'static [DraftInput] {
        &[Self::Label, Self::HelpText, Self::ErrorMessage]
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Label => "Field Name",
            Self::HelpText => "Help Text",
            Self::ErrorMessage => "Error Message",
        }
    }
}

/// Transient buffers for a custom field that has not been added yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFieldDraft {
    pub label: String,
    pub help_text: String,
    pub error_message: String,
}

impl CustomFieldDraft {
    pub fn get(&self, input: DraftInput) -> &str {
        match input {
            DraftInput::Label => &self.label,
            DraftInput::HelpText => &self.help_text,
            DraftInput::ErrorMessage => &self.error_message,
        }
    }

    pub fn get_mut(&mut self, input: DraftInput) -> &mut String {
        match input {
            DraftInput::Label => &mut self.label,
            DraftInput::HelpText => &mut self.help_text,
            DraftInput::ErrorMessage => &mut self.error_message,
        }
    }

    /// All three inputs are non-blank
    pub fn is_complete(&self) -> bool {
        DraftInput::all().iter().all(|input| !self.get(*input).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Anything that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Fixed(FixedField),
    Custom(usize),
    Draft(DraftInput),
}

pub struct AppState {
    storage: Arc<dyn Storage>,
    store: FormStore,
    current_step: StepKind,
    submitted: bool,
    submitted_record: Option<SubmittedRecord>,
    theme: Theme,
    share_domain: String,
    focus_index: usize,

    pub view_mode: ViewMode,
    pub draft: CustomFieldDraft,
    pub help_visible: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    /// Restore theme, working data, step and latest submission from storage
    pub fn load(storage: Arc<dyn Storage>, options: StateOptions) -> Self {
        let theme = match storage.load(keys::THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::from_storage),
            Err(e) => {
                warn!("Failed to read theme: {}", e);
                None
            }
        }
        .unwrap_or_default();
        storage::save_or_warn(storage.as_ref(), keys::THEME_KEY, theme.as_str());

        let store = FormStore::load(storage.clone());

        let current_step = match storage.load(keys::CURRENT_STEP_KEY) {
            Ok(value) => value
                .as_deref()
                .and_then(parse_step_index)
                .and_then(StepKind::from_index),
            Err(e) => {
                warn!("Failed to read current step: {}", e);
                None
            }
        }
        .unwrap_or_default();

        let submitted_record: Option<SubmittedRecord> =
            storage::load_json(storage.as_ref(), keys::SUBMITTED_DATA_KEY);

        info!(
            "Loaded form state: step={}, theme={}, custom_fields={}, previously_submitted={}",
            current_step.index(),
            theme.as_str(),
            store.form_data().fields.len(),
            submitted_record.is_some()
        );

        Self {
            storage,
            store,
            current_step,
            submitted: submitted_record.is_some(),
            submitted_record,
            theme,
            share_domain: options.share_domain,
            focus_index: 0,
            view_mode: options.view_mode,
            draft: CustomFieldDraft::default(),
            help_visible: false,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn current_step(&self) -> StepKind {
        self.current_step
    }

    pub fn form_data(&self) -> &FormData {
        self.store.form_data()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.store.errors()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn submitted_record(&self) -> Option<&SubmittedRecord> {
        self.submitted_record.as_ref()
    }

    /// Update one built-in field
    pub fn set_field(&mut self, field: FixedField, value: impl Into<String>) {
        self.store.set_form_data(FormPatch::field(field, value));
    }

    /// Update the value of the custom field at `index`; out of range is ignored
    pub fn set_custom_field_value(&mut self, index: usize, value: impl Into<String>) {
        let mut fields = self.form_data().fields.clone();
        let Some(field) = fields.get_mut(index) else {
            warn!("No custom field at index {}", index);
            return;
        };
        field.value = value.into();
        self.store.set_form_data(FormPatch::fields(fields));
    }

    /// Validate the current step and move forward on success
    pub fn next(&mut self) -> bool {
        let Some(next_step) = self.current_step.next() else {
            debug!("Next ignored on the final step");
            return false;
        };

        if !self.run_validation() {
            return false;
        }

        self.store.clear_errors();
        self.current_step = next_step;
        self.focus_index = 0;
        self.status_message = None;
        self.persist_step();
        info!("Advanced to step {}", self.current_step.index());
        true
    }

    /// Validate and submit from the final step
    pub fn submit(&mut self) -> Option<SubmittedRecord> {
        if !self.current_step.is_terminal() {
            debug!("Submit ignored before the final step");
            return None;
        }

        if !self.run_validation() {
            return None;
        }

        let form_id = submission::generate_form_id();
        let record = SubmittedRecord::new(self.form_data().clone(), form_id, &self.share_domain);

        let backend = self.storage.as_ref();
        storage::save_json(backend, &keys::submission_key(form_id), &record);
        storage::save_json(backend, keys::SUBMITTED_DATA_KEY, &record);

        self.submitted = true;
        self.submitted_record = Some(record.clone());
        self.store.clear_form_data();
        self.current_step = StepKind::default();
        self.focus_index = 0;
        self.status_message = Some(format!("Form submitted with id {form_id}"));

        info!("Submitted form {} ({})", form_id, record.shareable_url);
        Some(record)
    }

    /// Reset everything in progress, keeping per-id submission records
    pub fn clear(&mut self) {
        self.store.clear_form_data();
        self.current_step = StepKind::default();
        self.submitted = false;
        self.submitted_record = None;
        self.focus_index = 0;

        let backend = self.storage.as_ref();
        storage::remove_or_warn(backend, keys::SUBMITTED_DATA_KEY);
        storage::remove_or_warn(backend, keys::FORM_DATA_KEY);
        storage::remove_or_warn(backend, keys::CURRENT_STEP_KEY);

        self.status_message = Some("Form cleared".to_string());
        info!("Cleared form state");
    }

    /// Append a custom field from the draft buffers; no-op unless all three are filled
    pub fn add_custom_field(&mut self) -> bool {
        if !self.draft.is_complete() {
            debug!("Custom field draft incomplete, not adding");
            return false;
        }

        let draft = std::mem::take(&mut self.draft);
        let mut fields = self.form_data().fields.clone();
        fields.push(CustomField::new(draft.label, draft.help_text, draft.error_message));
        let count = fields.len();
        self.store.set_form_data(FormPatch::fields(fields));

        if let Some(label) = self
            .focus_targets()
            .iter()
            .position(|target| *target == FocusTarget::Draft(DraftInput::Label))
        {
            self.focus_index = label;
        }

        self.status_message = Some("Custom field added".to_string());
        info!("Added custom field #{}", count - 1);
        true
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        storage::save_or_warn(self.storage.as_ref(), keys::THEME_KEY, self.theme.as_str());
        debug!("Theme switched to {}", self.theme.as_str());
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Inputs that can be focused on the current step, in tab order
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets: Vec<FocusTarget> = self
            .current_step
            .fields()
            .iter()
            .map(|field| FocusTarget::Fixed(*field))
            .collect();
        targets.extend((0..self.form_data().fields.len()).map(FocusTarget::Custom));
        if self.current_step.is_terminal() {
            targets.extend(DraftInput::all().iter().map(|input| FocusTarget::Draft(*input)));
        }
        targets
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        let targets = self.focus_targets();
        targets
            .get(self.focus_index.min(targets.len().saturating_sub(1)))
            .copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus_index = (self.focus_index.min(count - 1) + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus_index = (self.focus_index.min(count - 1) + count - 1) % count;
        }
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        match self.focused() {
            Some(FocusTarget::Fixed(field)) => {
                if field_spec(field).kind == FieldKind::Select {
                    return;
                }
                let mut value = self.form_data().value(field).to_string();
                value.push(c);
                self.set_field(field, value);
            }
            Some(FocusTarget::Custom(index)) => {
                if let Some(custom) = self.form_data().fields.get(index) {
                    let mut value = custom.value.clone();
                    value.push(c);
                    self.set_custom_field_value(index, value);
                }
            }
            Some(FocusTarget::Draft(input)) => self.draft.get_mut(input).push(c),
            None => {}
        }
    }

    /// Delete the last character of the focused input (clears a select)
    pub fn backspace(&mut self) {
        match self.focused() {
            Some(FocusTarget::Fixed(field)) => {
                let mut value = self.form_data().value(field).to_string();
                if field_spec(field).kind == FieldKind::Select {
                    value.clear();
                } else {
                    value.pop();
                }
                self.set_field(field, value);
            }
            Some(FocusTarget::Custom(index)) => {
                if let Some(custom) = self.form_data().fields.get(index) {
                    let mut value = custom.value.clone();
                    value.pop();
                    self.set_custom_field_value(index, value);
                }
            }
            Some(FocusTarget::Draft(input)) => {
                self.draft.get_mut(input).pop();
            }
            None => {}
        }
    }

    /// Insert a line break; only the textarea accepts one
    pub fn insert_newline(&mut self) {
        if let Some(FocusTarget::Fixed(field)) = self.focused() {
            if field_spec(field).kind == FieldKind::TextArea {
                let mut value = self.form_data().value(field).to_string();
                value.push('\n');
                self.set_field(field, value);
            }
        }
    }

    /// Type pasted text into the focused input
    pub fn paste_text(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.insert_newline();
            } else if !c.is_control() {
                self.input_char(c);
            }
        }
    }

    /// Whether the focused input is a dropdown
    pub fn focused_is_select(&self) -> bool {
        matches!(
            self.focused(),
            Some(FocusTarget::Fixed(field)) if field_spec(field).kind == FieldKind::Select
        )
    }

    /// Move the focused select to its next (or previous) option
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(FocusTarget::Fixed(field)) = self.focused() else {
            return;
        };
        let options = field_spec(field).options;
        if options.is_empty() {
            return;
        }

        let current = options.iter().position(|opt| *opt == self.form_data().value(field));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.set_field(field, options[next]);
    }

    /// Enter: add a field from the mini-form, otherwise Next or Submit
    pub fn primary_action(&mut self) {
        if matches!(self.focused(), Some(FocusTarget::Draft(_))) {
            self.add_custom_field();
        } else if self.current_step.is_terminal() {
            self.submit();
        } else {
            self.next();
        }
    }

    /// Put the latest shareable link on the system clipboard
    pub fn copy_share_link(&mut self) {
        let Some(url) = self.submitted_record.as_ref().map(|r| r.shareable_url.clone()) else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return;
        };

        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url));
        self.status_message = Some(match result {
            Ok(()) => "Shareable link copied to clipboard".to_string(),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                format!("Could not copy link: {e}")
            }
        });
    }

    fn run_validation(&mut self) -> bool {
        let errors = validation::validate_step(self.current_step, self.form_data());
        if errors.is_empty() {
            return true;
        }

        debug!(
            "Validation failed on step {}: {:?}",
            self.current_step.index(),
            errors.keys().map(ToString::to_string).collect::<Vec<_>>()
        );
        self.store.set_errors(errors);
        self.status_message = Some("Please fix the highlighted fields".to_string());
        false
    }

    fn persist_step(&self) {
        if !self.submitted {
            storage::save_or_warn(
                self.storage.as_ref(),
                keys::CURRENT_STEP_KEY,
                &self.current_step.index().to_string(),
            );
        }
    }
}

/// Leading integer of a stored step value: `"1abc"` and `"1.0"` read as 1
fn parse_step_index(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: usize = rest[..digits].parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(storage: Arc<dyn Storage>, options: StateOptions) -> Self {
        Self {
            state: AppState::load(storage, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, MockStorage, StorageError};
    use pretty_assertions::assert_eq;

    fn fresh_state() -> (Arc<MemoryStorage>, AppState) {
        let storage = Arc::new(MemoryStorage::new());
        let state = AppState::load(storage.clone(), StateOptions::default());
        (storage, state)
    }

    #[test]
    fn test_focus_order_on_final_step() {
        let (storage, _) = fresh_state();
        storage.save(keys::CURRENT_STEP_KEY, "2").unwrap();
        let mut state = AppState::load(storage, StateOptions::default());

        assert_eq!(
            state.focus_targets(),
            vec![
                FocusTarget::Fixed(FixedField::AboutYourself),
                FocusTarget::Draft(DraftInput::Label),
                FocusTarget::Draft(DraftInput::HelpText),
                FocusTarget::Draft(DraftInput::ErrorMessage),
            ]
        );

        state.focus_previous();
        assert_eq!(state.focused(), Some(FocusTarget::Draft(DraftInput::ErrorMessage)));
        state.focus_next();
        assert_eq!(state.focused(), Some(FocusTarget::Fixed(FixedField::AboutYourself)));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let (_, mut state) = fresh_state();
        state.paste_text("Ada");
        state.focus_next();
        state.input_char('L');
        state.backspace();
        state.paste_text("Lovelace");

        assert_eq!(state.form_data().first_name, "Ada");
        assert_eq!(state.form_data().last_name, "Lovelace");
    }

    #[test]
    fn test_select_cycles_options_and_ignores_typing() {
        let (_, mut state) = fresh_state();
        state.current_step = StepKind::InternshipDetails;

        assert!(state.focused_is_select());
        state.input_char('x');
        assert_eq!(state.form_data().prev_intern_experience, "");

        state.cycle_option(true);
        assert_eq!(state.form_data().prev_intern_experience, "Yes");
        state.cycle_option(true);
        assert_eq!(state.form_data().prev_intern_experience, "No");
        state.cycle_option(true);
        assert_eq!(state.form_data().prev_intern_experience, "Yes");

        state.focus_next();
        state.cycle_option(false);
        assert_eq!(state.form_data().internship_duration, "6");

        state.backspace();
        assert_eq!(state.form_data().internship_duration, "");
    }

    #[test]
    fn test_newline_only_in_textarea() {
        let (_, mut state) = fresh_state();
        state.insert_newline();
        assert_eq!(state.form_data().first_name, "");

        state.current_step = StepKind::AboutYourself;
        state.paste_text("line one\nline two");
        assert_eq!(state.form_data().about_yourself, "line one\nline two");
    }

    #[test]
    fn test_enter_on_draft_adds_field_instead_of_submitting() {
        let (_, mut state) = fresh_state();
        state.current_step = StepKind::AboutYourself;
        state.draft = CustomFieldDraft {
            label: "GitHub".to_string(),
            help_text: "Your handle".to_string(),
            error_message: "Handle is required".to_string(),
        };
        state.focus_next();
        assert_eq!(state.focused(), Some(FocusTarget::Draft(DraftInput::Label)));

        state.primary_action();

        assert_eq!(state.form_data().fields.len(), 1);
        assert!(!state.is_submitted());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_adding_field_returns_focus_to_label_input() {
        let (_, mut state) = fresh_state();
        state.current_step = StepKind::AboutYourself;
        state.draft = CustomFieldDraft {
            label: "GitHub".to_string(),
            help_text: "Your handle".to_string(),
            error_message: "Handle is required".to_string(),
        };
        state.focus_previous();
        assert_eq!(state.focused(), Some(FocusTarget::Draft(DraftInput::ErrorMessage)));

        state.primary_action();

        assert_eq!(state.form_data().fields.len(), 1);
        assert_eq!(state.focused(), Some(FocusTarget::Draft(DraftInput::Label)));
        state.input_char('X');
        assert_eq!(state.draft.label, "X");
        assert_eq!(state.form_data().fields[0].value, "");
    }

    #[test]
    fn test_step_index_reads_leading_integer() {
        assert_eq!(parse_step_index("1abc"), Some(1));
        assert_eq!(parse_step_index("1.0"), Some(1));
        assert_eq!(parse_step_index("2px"), Some(2));
        assert_eq!(parse_step_index("  +2"), Some(2));
        assert_eq!(parse_step_index("-0"), Some(0));
        assert_eq!(parse_step_index("-1"), None);
        assert_eq!(parse_step_index("abc"), None);
        assert_eq!(parse_step_index(""), None);
    }

    #[test]
    fn test_load_accepts_step_with_trailing_text() {
        let cases = [
            ("1abc", StepKind::InternshipDetails),
            ("1.0", StepKind::InternshipDetails),
            ("2px", StepKind::AboutYourself),
            ("abc", StepKind::PersonalInformation),
            ("-1", StepKind::PersonalInformation),
            ("7", StepKind::PersonalInformation),
        ];

        for (raw, expected) in cases {
            let storage = Arc::new(MemoryStorage::new());
            storage.save(keys::CURRENT_STEP_KEY, raw).unwrap();
            let state = AppState::load(storage, StateOptions::default());
            assert_eq!(state.current_step, expected, "stored step {raw:?}");
        }
    }

    #[test]
    fn test_copy_without_submission_reports_status() {
        let (_, mut state) = fresh_state();
        state.copy_share_link();
        assert_eq!(state.status_message.as_deref(), Some("Nothing submitted yet"));
    }

    #[test]
    fn test_unreadable_storage_starts_with_defaults() {
        let mut mock = MockStorage::new();
        mock.expect_load().returning(|_| {
            Err(StorageError::Io {
                path: "storage.json".to_string(),
                source: std::io::Error::other("permission denied"),
            })
        });
        mock.expect_save().returning(|_, _| Ok(()));

        let state = AppState::load(Arc::new(mock), StateOptions::default());

        assert_eq!(state.current_step(), StepKind::PersonalInformation);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.form_data(), &FormData::default());
        assert!(!state.is_submitted());
    }

    #[test]
    fn test_theme_written_once_at_load() {
        let mut mock = MockStorage::new();
        mock.expect_load().returning(|_| Ok(None));
        mock.expect_save()
            .withf(|key, value| key.to_string() == keys::THEME_KEY && value.to_string() == "light")
            .times(1)
            .returning(|_, _| Ok(()));

        let _state = AppState::load(Arc::new(mock), StateOptions::default());
    }
}

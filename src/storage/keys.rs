// ABOUTME: Storage key names shared by the form store and the stepper controller

/// Working (not yet submitted) form record
pub const FORM_DATA_KEY: &str = "internship_form_data";

/// Index of the step the user was on
pub const CURRENT_STEP_KEY: &str = "currentStep";

/// Selected color theme
pub const THEME_KEY: &str = "internship_form_theme";

/// Most recent submission
pub const SUBMITTED_DATA_KEY: &str = "submitted_form_data";

/// Key of the permanent record for one submission
pub fn submission_key(form_id: u64) -> String {
    format!("{SUBMITTED_DATA_KEY}_{form_id}")
}

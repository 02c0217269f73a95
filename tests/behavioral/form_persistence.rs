// ABOUTME: Behavioral tests for form progress surviving restarts through FileStorage
//
// Verifies the storage.json format, restart recovery, and Clear/Submit key lifecycle.

use super::fixtures::TestDataDir;
use intern_form::app::StepKind;
use intern_form::models::{FixedField, FormData, Theme};
use intern_form::storage::keys;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn read_map(data: &TestDataDir) -> BTreeMap<String, String> {
    let raw = std::fs::read_to_string(data.storage_file()).expect("storage file should exist");
    serde_json::from_str(&raw).expect("storage file should be a JSON object of strings")
}

/// Test 1: Answers and step survive a restart
#[test]
fn test_progress_survives_restart() {
    let data = TestDataDir::new();

    let mut state = data.start();
    state.set_field(FixedField::FirstName, "Ada");
    state.set_field(FixedField::LastName, "Lovelace");
    state.set_field(FixedField::Email, "ada@example.com");
    state.set_field(FixedField::Phone, "0123456789");
    assert!(state.next());
    state.set_field(FixedField::PrevInternExperience, "Yes");
    state.toggle_theme();
    drop(state);

    let restarted = data.start();
    assert_eq!(restarted.current_step(), StepKind::InternshipDetails);
    assert_eq!(restarted.form_data().last_name, "Lovelace");
    assert_eq!(restarted.form_data().prev_intern_experience, "Yes");
    assert_eq!(restarted.theme(), Theme::Dark);
}

/// Test 2: The file is a flat key -> string map using the well-known keys
#[test]
fn test_storage_file_format() {
    let data = TestDataDir::new();

    let mut state = data.start();
    state.set_field(FixedField::FirstName, "Ada");

    let map = read_map(&data);
    assert_eq!(map.get(keys::THEME_KEY).map(String::as_str), Some("light"));

    let form: serde_json::Value = serde_json::from_str(&map[keys::FORM_DATA_KEY]).unwrap();
    assert_eq!(form["firstName"], "Ada");
    assert_eq!(form["prevInternExperience"], "");
    assert_eq!(form["fields"], serde_json::json!([]));
}

/// Test 3: Submission keys written, working keys removed
#[test]
fn test_submission_key_lifecycle() {
    let data = TestDataDir::new();
    std::fs::write(
        data.storage_file(),
        serde_json::json!({ keys::CURRENT_STEP_KEY: "2" }).to_string(),
    )
    .unwrap();

    let mut state = data.start();
    state.set_field(FixedField::AboutYourself, "Curious about compilers");
    let record = state.submit().expect("valid final step should submit");

    let map = read_map(&data);
    assert!(!map.contains_key(keys::FORM_DATA_KEY));
    assert!(!map.contains_key(keys::CURRENT_STEP_KEY));

    let by_id: serde_json::Value =
        serde_json::from_str(&map[&keys::submission_key(record.form_id)]).unwrap();
    assert_eq!(by_id["formId"], record.form_id);
    assert_eq!(by_id["shareableUrl"], record.shareable_url.as_str());
    assert_eq!(by_id["aboutYourself"], "Curious about compilers");

    let restarted = data.start();
    assert!(restarted.is_submitted());
    assert_eq!(restarted.form_data(), &FormData::default());
}

/// Test 4: Clear after restart keeps the per-id archive
#[test]
fn test_clear_after_restart() {
    let data = TestDataDir::new();
    std::fs::write(
        data.storage_file(),
        serde_json::json!({ keys::CURRENT_STEP_KEY: "2" }).to_string(),
    )
    .unwrap();
    let mut state = data.start();
    state.set_field(FixedField::AboutYourself, "Hello");
    let record = state.submit().unwrap();
    drop(state);

    let mut restarted = data.start();
    restarted.clear();

    let map = read_map(&data);
    assert!(!map.contains_key(keys::SUBMITTED_DATA_KEY));
    assert!(map.contains_key(&keys::submission_key(record.form_id)));
    assert!(!data.start().is_submitted());
}

/// Test 5: A corrupt storage file starts an empty form instead of failing
#[test]
fn test_corrupt_storage_file_is_ignored() {
    let data = TestDataDir::new();
    std::fs::write(data.storage_file(), "this is not json").unwrap();

    let mut state = data.start();
    assert_eq!(state.current_step(), StepKind::PersonalInformation);
    assert_eq!(state.form_data(), &FormData::default());

    state.set_field(FixedField::FirstName, "Ada");
    assert_eq!(data.start().form_data().first_name, "Ada");
}

// ABOUTME: Behavioral tests for configuration loading and how it feeds the stepper
// Verifies defaults, file precedence, and share domain flowing into links

use super::fixtures::TestDataDir;
use intern_form::app::AppState;
use intern_form::config::AppConfig;
use intern_form::models::{FixedField, ViewMode};
use intern_form::storage::keys;

/// Default config is usable without any file
#[test]
fn test_default_config_has_sensible_values() {
    let config = AppConfig::default();
    let options = config.state_options();

    assert_eq!(options.share_domain, "yourdomain.com");
    assert_eq!(options.view_mode, ViewMode::Desktop);
}

/// Config file values reach the stepper
#[test]
fn test_config_drives_view_mode_and_links() {
    let data = TestDataDir::new();
    let config_path = data.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[share]\ndomain = \"apply.example.org\"\n\n[ui]\ndefault_view_mode = \"laptop\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from_paths(&[config_path]).unwrap();
    let storage = data.storage();
    storage.save(keys::CURRENT_STEP_KEY, "2").unwrap();

    let mut state = AppState::load(storage, config.state_options());
    assert_eq!(state.view_mode, ViewMode::Laptop);

    state.set_field(FixedField::AboutYourself, "Hello");
    let record = state.submit().unwrap();
    assert_eq!(
        record.shareable_url,
        format!("http://apply.example.org/form/{}", record.form_id)
    );
}

/// Storage dir from config is used when no override is given
#[test]
fn test_data_dir_from_config_file() {
    let data = TestDataDir::new();
    let config_path = data.path().join("config.toml");
    std::fs::write(&config_path, "[storage]\ndata_dir = \"/srv/intern-form\"\n").unwrap();

    let config = AppConfig::load_from_paths(&[config_path]).unwrap();

    assert_eq!(
        config.storage.data_dir.as_deref(),
        Some(std::path::Path::new("/srv/intern-form"))
    );
    let cli_dir = data.path().join("cli");
    assert_eq!(config.resolve_data_dir(Some(&cli_dir)).unwrap(), cli_dir);
}

/// Unparsable config files are reported, not silently ignored
#[test]
fn test_malformed_config_is_an_error() {
    let data = TestDataDir::new();
    let config_path = data.path().join("config.toml");
    std::fs::write(&config_path, "[ui\ndefault_view_mode = ").unwrap();

    let err = AppConfig::load_from_paths(&[config_path]).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

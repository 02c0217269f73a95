// ABOUTME: Configuration management for intern-form
// Handles storage location, shareable-link domain and UI defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::StateOptions;
use crate::models::{submission, ViewMode, DEFAULT_SHARE_DOMAIN};

/// Environment variable that overrides the storage directory
pub const DATA_DIR_ENV: &str = "INTERN_FORM_DATA_DIR";

/// Settings merged from config files; unset values fall back to defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Where form state is persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Shareable link settings
    #[serde(default)]
    pub share: ShareConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Storage directory (default: ~/.intern-form/data)
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShareConfig {
    /// Host used in `http://<domain>/form/<id>` links (default: yourdomain.com)
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// View mode the TUI starts in (default: desktop)
    pub default_view_mode: Option<ViewMode>,
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load and merge the given files; earlier paths take precedence
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();

        for path in paths.iter().rev() {
            if path.exists() {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;

                let file_config: AppConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;

                config.merge(file_config);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject share domains that cannot form a link
    pub fn validate(&self) -> Result<()> {
        let domain = self.share_domain();
        submission::validate_share_domain(domain)
            .with_context(|| format!("Invalid share.domain '{domain}'"))
    }

    /// Storage directory: CLI flag, then environment, then config file, then default
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }
        Self::default_data_dir()
    }

    pub fn share_domain(&self) -> &str {
        self.share.domain.as_deref().unwrap_or(DEFAULT_SHARE_DOMAIN)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.ui.default_view_mode.unwrap_or_default()
    }

    pub fn state_options(&self) -> StateOptions {
        StateOptions {
            share_domain: self.share_domain().to_string(),
            view_mode: self.view_mode(),
        }
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".intern-form").join("config.toml"));
        }

        // 2. User config (~/.intern-form/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        paths
    }

    fn get_home_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".intern-form"))
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        Ok(Self::get_home_dir()?.join("config"))
    }

    fn default_data_dir() -> Result<PathBuf> {
        Ok(Self::get_home_dir()?.join("data"))
    }

    /// Merge another config into this one; any value the other file sets wins
    fn merge(&mut self, other: AppConfig) {
        if other.storage.data_dir.is_some() {
            self.storage.data_dir = other.storage.data_dir;
        }
        if other.share.domain.is_some() {
            self.share.domain = other.share.domain;
        }
        if other.ui.default_view_mode.is_some() {
            self.ui.default_view_mode = other.ui.default_view_mode;
        }
    }
}

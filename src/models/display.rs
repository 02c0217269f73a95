// ABOUTME: Display preferences - color theme and form width (view mode)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted theme; anything but "light"/"dark" is rejected
    pub fn from_storage(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the button that switches away from this theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Laptop,
    Mobile,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[Self::Desktop, Self::Laptop, Self::Mobile]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Desktop => "Desktop View",
            Self::Laptop => "Laptop View",
            Self::Mobile => "Mobile View",
        }
    }

    /// Maximum width of the form column, in terminal cells
    pub fn max_width(&self) -> u16 {
        match self {
            Self::Desktop => 120,
            Self::Laptop => 100,
            Self::Mobile => 48,
        }
    }
}

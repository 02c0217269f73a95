// ABOUTME: CLI argument parsing and command routing for intern-form
//
// Provides command-line interface for:
// - Filling in the internship survey (tui, default)
// - Printing the latest submission (show) or one by id (lookup)
// - Resetting saved progress (clear)

pub mod clear;
pub mod show;

use crate::models::ViewMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Internship survey - a multi-step form in the terminal
#[derive(Parser)]
#[command(name = "intern-form")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory holding saved form state (overrides config and INTERN_FORM_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui(TuiArgs),

    /// Print the most recent submission
    Show,

    /// Print the submission saved under a form id
    Lookup(LookupArgs),

    /// Discard in-progress answers and the latest submission
    Clear,
}

/// Arguments for the tui command
#[derive(clap::Args, Debug, Default, PartialEq, Eq)]
pub struct TuiArgs {
    /// Start in this view instead of the configured one
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,
}

/// Arguments for the lookup command
#[derive(clap::Args, Debug, PartialEq, Eq)]
pub struct LookupArgs {
    /// Shareable form id
    pub form_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["intern-form"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_lookup_with_global_flags() {
        let cli = Cli::try_parse_from([
            "intern-form",
            "lookup",
            "42",
            "--format",
            "json",
            "--data-dir",
            "/tmp/forms",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(Commands::Lookup(LookupArgs { form_id: 42 })));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/forms")));
    }

    #[test]
    fn test_tui_view_flag() {
        let cli = Cli::try_parse_from(["intern-form", "tui", "--view", "mobile"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Tui(TuiArgs {
                view: Some(ViewMode::Mobile)
            }))
        );

        assert!(Cli::try_parse_from(["intern-form", "tui", "--view", "tablet"]).is_err());
    }

    #[test]
    fn test_lookup_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["intern-form", "lookup", "abc"]).is_err());
    }
}

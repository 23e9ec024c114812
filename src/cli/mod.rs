//! Command-Line Front-End
//!
//! Argument parsing and subcommand handlers for the `printfleet` binary.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, TableArgs};
pub use commands::execute;

use crate::domain::config::AppConfig;

/// Apply `--locale` and `--base-url` on top of the loaded config
pub fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(base_url) = cli.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
        config.api.base_url = base_url.to_string();
    }
}

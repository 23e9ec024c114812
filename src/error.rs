//! Error types for PrintFleet Dashboard
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the dashboard
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid construction arguments (table id, page size, config values)
    #[snafu(display("Configuration error: {message}"))]
    Config { message: String },

    /// Network failure before a response was received
    #[snafu(display("Request to {url} failed: {source}"))]
    Transport { url: String, source: reqwest::Error },

    /// Backend answered with a non-success status
    #[snafu(display("{url} responded with HTTP {status}"))]
    HttpStatus { url: String, status: u16 },

    /// Form input that cannot be turned into a request
    #[snafu(display("Invalid {field}: {message}"))]
    Validation { field: String, message: String },

    /// A table refresh failed; carries the user-facing message
    #[snafu(display("{message}"))]
    Load { message: String },

    /// Backend refused a task distribution request
    #[snafu(display("Task distribution failed: {detail}"))]
    Distribution { detail: String },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// IO error (config files, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Anything else that is the caller's fault
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },
}

impl Error {
    /// Shorthand for a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Shorthand for a validation error on a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the error is worth retrying on the next refresh
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::HttpStatus { .. }
                | Error::Load { .. }
                | Error::Json { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

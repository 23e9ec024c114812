//! Config - Application Configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::components::table::TableOptions;
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_FETCH_LIMIT, DEFAULT_PAGE_SIZE, QUEUE_REFRESH_SECS,
    REQUEST_TIMEOUT_SECS,
};
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Backend connection
    pub api: ApiConfig,
    /// Table defaults
    pub table: TableConfig,
    /// Queue board
    pub queue: QueueConfig,
    /// UI language
    pub locale: Locale,
    /// Directory for rolling log files (stderr only when unset)
    pub log_dir: Option<PathBuf>,
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, e.g. "http://127.0.0.1:8000"
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Table configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,
    /// Records requested per load
    pub fetch_limit: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

/// Queue board configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueueConfig {
    /// Auto-refresh interval in seconds
    pub refresh_secs: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            refresh_secs: QUEUE_REFRESH_SECS,
        }
    }
}

impl QueueConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs.max(1))
    }
}

impl AppConfig {
    /// Table options derived from the `[table]` section
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            page_size: Some(self.table.page_size),
            fetch_limit: Some(self.table.fetch_limit),
            locale: self.locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: AppConfig = toml::from_str("").expect("config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.queue.refresh_secs, 30);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            locale = "ru"

            [api]
            base_url = "http://fleet.local:9000"

            [table]
            page_size = 25
            "#,
        )
        .expect("config");

        assert_eq!(config.api.base_url, "http://fleet.local:9000");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.table.fetch_limit, 100);
        assert_eq!(config.locale, Locale::RuRU);
    }

    #[test]
    fn table_options_follow_config() {
        let mut config = AppConfig::default();
        config.table.page_size = 5;
        let options = config.table_options();
        assert_eq!(options.page_size, Some(5));
        assert_eq!(options.fetch_limit, Some(100));
    }
}

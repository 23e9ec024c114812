//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Platform configuration directory
///
/// - **Linux**: `~/.config/printfleet-dashboard/`
/// - **macOS**: `~/Library/Application Support/com.printfleet.printfleet-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\printfleet\printfleet-dashboard\config\`
pub fn config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "printfleet", "printfleet-dashboard") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Default config file location
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load a TOML config file; a missing file yields defaults
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse and validate a TOML config document
pub fn parse_config(content: &str) -> Result<AppConfig> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    let config: AppConfig = toml::from_str(content)?;
    if config.table.page_size == 0 {
        return Err(Error::config("table.page_size must be a positive integer"));
    }
    if config.table.fetch_limit == 0 {
        return Err(Error::config("table.fetch_limit must be a positive integer"));
    }
    if config.api.base_url.trim().is_empty() {
        return Err(Error::config("api.base_url must not be empty"));
    }
    Ok(config)
}

/// Load from `path` or the platform default location
pub fn load_config_or_default(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => load_config(&default_config_path()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("printfleet-dashboard-missing-config.toml");
        let config = load_config(&path).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn zero_page_size_is_config_error() {
        let err = parse_config("[table]\npage_size = 0\n").expect_err("zero");
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = parse_config("[table\npage_size = 3").expect_err("malformed");
        assert!(matches!(err, Error::TomlDe { .. }));
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "printfleet-dashboard-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[queue]\nrefresh_secs = 5\n").expect("write");
        let config = load_config(&path).expect("config");
        let _ = fs::remove_file(&path);
        assert_eq!(config.queue.refresh_secs, 5);
    }
}

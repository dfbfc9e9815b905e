//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/tally/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/tally/` (~/.config/tally/)
//! - State/Logs: `$XDG_STATE_HOME/tally/` (~/.local/state/tally/)

use crate::context::AverageMode;
use crate::error::{Error, Result};
use chrono::Weekday;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Statistics settings
    #[serde(default)]
    pub stats: StatsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// User-facing statistics settings
#[derive(Debug, Deserialize, Default, Clone)]
pub struct StatsConfig {
    /// How averages pick their end point
    #[serde(default)]
    pub average_mode: AverageMode,

    /// First day of the week ("mon", "sunday", ...). Derived from the locale when unset.
    #[serde(default)]
    pub first_day_of_week: Option<Weekday>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        // Read and parse the TOML file
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        // Missing sections fall back to their defaults
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/tally/config.toml` (~/.config/tally/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("tally").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/tally/` (~/.local/state/tally/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("tally")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/tally/tally.log` (~/.local/state/tally/tally.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("tally.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stats.average_mode, AverageMode::FirstToNow);
        assert!(config.stats.first_day_of_week.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_parse_config() {
        // Logging section omits max_files, which keeps its default
        let toml = r#"
[stats]
average_mode = "first_to_last"
first_day_of_week = "sun"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.stats.average_mode, AverageMode::FirstToLast);
        assert_eq!(config.stats.first_day_of_week, Some(Weekday::Sun));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[stats]\nfirst_day_of_week = \"monday\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.stats.first_day_of_week, Some(Weekday::Mon));
        assert_eq!(config.stats.average_mode, AverageMode::FirstToNow);
    }

    #[test]
    fn test_load_from_invalid_file() {
        // Unknown average mode must be rejected, not defaulted
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[stats]\naverage_mode = \"sometimes\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_log_path() {
        assert!(Config::log_path().ends_with("tally/tally.log"));
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Smallest usable dialog width in the wide layout.
pub const MIN_DIALOG_WIDTH: u16 = 20;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/profile-lookup/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("profile-lookup").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The narrow breakpoint is non-zero
    /// - The dialog width cap leaves room for content
    /// - The tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;

        if display.narrow_breakpoint == 0 {
            return Err(ConfigError::ValidationError {
                message: "display.narrow_breakpoint must be greater than 0".to_string(),
            });
        }

        if display.max_width < MIN_DIALOG_WIDTH {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "display.max_width must be at least {}, got {}",
                    MIN_DIALOG_WIDTH, display.max_width
                ),
            });
        }

        if display.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "display.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

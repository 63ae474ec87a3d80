use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Layout and asset settings for the profile dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix for asset paths (default: "img"). Empty for none.
    #[serde(default = "default_asset_root")]
    pub asset_root: String,
    /// Terminal width in columns below which the narrow layout is used (default: 60).
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u16,
    /// Maximum dialog width in the wide layout (default: 72).
    #[serde(default = "default_max_width")]
    pub max_width: u16,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Without one, interactive mode discards logs.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_asset_root() -> String {
    "img".to_string()
}

fn default_narrow_breakpoint() -> u16 {
    60
}

fn default_max_width() -> u16 {
    72
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            narrow_breakpoint: default_narrow_breakpoint(),
            max_width: default_max_width(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

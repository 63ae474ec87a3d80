pub mod loader;
pub mod types;

pub use loader::{ConfigError, MIN_DIALOG_WIDTH};
pub use types::{Config, DisplayConfig, LoggingConfig};

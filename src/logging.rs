//! Tracing subscriber setup.
//!
//! The interactive UI owns stdout, so logs only go to a terminal stream in
//! print mode.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogSink {
    pub fn for_mode(config: &LoggingConfig, interactive: bool) -> Self {
        match (&config.file, interactive) {
            (Some(path), _) => LogSink::File(path.clone()),
            (None, false) => LogSink::Stderr,
            (None, true) => LogSink::Discard,
        }
    }
}

pub fn init_tracing(config: &LoggingConfig, sink: LogSink) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    // A subscriber may already be installed (tests, embedding); keep it.
    let installed = match sink {
        LogSink::Stderr => builder.with_writer(io::stderr).try_init(),
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogSink::Discard => builder.with_writer(io::sink).try_init(),
    };
    if let Err(err) = installed {
        tracing::debug!(error = %err, "Keeping existing tracing subscriber");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_file_wins_in_both_modes() {
        let config = LoggingConfig {
            level: "debug".into(),
            file: Some(PathBuf::from("/tmp/profile-lookup.log")),
        };
        let expected = LogSink::File(PathBuf::from("/tmp/profile-lookup.log"));
        assert_eq!(LogSink::for_mode(&config, true), expected);
        assert_eq!(LogSink::for_mode(&config, false), expected);
    }

    #[test]
    fn interactive_without_file_discards() {
        let config = LoggingConfig::default();
        assert_eq!(LogSink::for_mode(&config, true), LogSink::Discard);
        assert_eq!(LogSink::for_mode(&config, false), LogSink::Stderr);
    }

    #[test]
    fn second_init_keeps_existing_subscriber() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config, LogSink::Discard).is_ok());
        assert!(init_tracing(&config, LogSink::Discard).is_ok());
    }
}

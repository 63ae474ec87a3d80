use profile_lookup::config::{Config, ConfigError, DisplayConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.display.asset_root, "img");
    assert_eq!(config.display.narrow_breakpoint, 60);
    assert_eq!(config.display.max_width, 72);
    assert_eq!(config.display.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("profile-lookup/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.display.max_width, 72);
}

#[test]
fn test_parse_partial_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[display]
asset_root = ""
narrow_breakpoint = 80

[logging]
level = "debug"
file = "/tmp/profile-lookup.log"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.asset_root, "");
    assert_eq!(config.display.narrow_breakpoint, 80);
    assert_eq!(config.display.max_width, 72);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file.is_some());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is not valid toml [[[").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_breakpoint() {
    let config = Config {
        display: DisplayConfig {
            narrow_breakpoint: 0,
            ..DisplayConfig::default()
        },
        ..Config::default()
    };

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("narrow_breakpoint"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_tiny_width() {
    let config = Config {
        display: DisplayConfig {
            max_width: 10,
            ..DisplayConfig::default()
        },
        ..Config::default()
    };

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("max_width"));
            assert!(message.contains("10"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_config_roundtrip() {
    let defaults = Config::default();
    let serialized = toml::to_string(&defaults).expect("Should serialize");
    let deserialized: Config = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(defaults.display.asset_root, deserialized.display.asset_root);
    assert_eq!(defaults.display.max_width, deserialized.display.max_width);
}

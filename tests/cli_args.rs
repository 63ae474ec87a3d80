//! Tests for CLI argument parsing and print mode, run against the built binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn profile_lookup_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_profile-lookup"))
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_lists_inputs() {
    let output = profile_lookup_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--roster"));
    assert!(stdout.contains("--profile"));
    assert!(stdout.contains("--social"));
    assert!(stdout.contains("--print"));
}

#[test]
fn test_missing_roster_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = profile_lookup_cmd()
        .arg("--roster")
        .arg(dir.path().join("nope.json"))
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--print")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read data file"));
}

#[test]
fn test_print_renders_placeholders() {
    let dir = TempDir::new().unwrap();
    let roster = write(&dir, "roster.json", "{}");
    let social = write(&dir, "social.json", r#"{"reddit": "u/doctor"}"#);

    let output = profile_lookup_cmd()
        .arg("--roster")
        .arg(&roster)
        .arg("--social")
        .arg(&social)
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--print")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Server Unknown - #Tag Unknown - Level Unknown"));
    assert!(stdout.contains("Discord #"));
    assert!(stdout.contains("u/doctor"));
}

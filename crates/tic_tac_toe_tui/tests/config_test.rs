//! Tests for TUI config loading.

use std::io::Write;
use std::path::{Path, PathBuf};
use tic_tac_toe_tui::TuiConfig;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    file.write_all(content.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_defaults_without_file() {
    let config = TuiConfig::load(None).expect("Defaults");
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log_file(), Path::new("tic_tac_toe_tui.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(*config.show_help());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("show_help = false\n");
    let config = TuiConfig::from_file(file.path()).expect("Valid config");

    assert!(!*config.show_help());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
log_file = "/tmp/ttt.log"
log_filter = "tic_tac_toe=debug"
show_help = true
"#,
    );
    let config = TuiConfig::load(Some(file.path())).expect("Valid config");

    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "tic_tac_toe=debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("show_help = \"sometimes\"\n");
    let err = TuiConfig::from_file(file.path()).expect_err("Wrong type");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = TuiConfig::from_file(dir.path().join("missing.toml")).expect_err("No file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_log_file_override() {
    let config = TuiConfig::default().with_log_file(PathBuf::from("other.log"));
    assert_eq!(config.log_file(), Path::new("other.log"));
}

//! Tests for loading settings from disk.

use std::io::Write;
use tictactoe_timeline::{Session, Settings, SortOrder};

#[test]
fn test_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "sort_order = \"descending\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let settings = Settings::from_file(file.path()).expect("valid settings");
    assert_eq!(*settings.sort_order(), SortOrder::Descending);
    assert_eq!(settings.log_filter(), "debug");

    let session = Session::with_sort_order(*settings.sort_order());
    assert!(!session.sort_ascending());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read settings file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "sort_order = 3").unwrap();
    assert!(Settings::from_file(file.path()).is_err());
}

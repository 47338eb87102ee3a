//! Tests for the error module.

use crate::error::config::ConfigError;
use crate::error::PrefixIndexError;
use std::path::PathBuf;

/// Test that nested errors keep their message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = PrefixIndexError::Io(io_error);

    let error_string = format!("{error}");
    assert!(error_string.contains("file not found"));
}

/// Test conversions used by `?` in the catalog and config code.
#[test]
fn test_error_conversions() {
    let config_error = ConfigError::FileNotFound(PathBuf::from("missing.toml"));
    let error: PrefixIndexError = config_error.into();
    assert!(matches!(error, PrefixIndexError::Config(_)));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration file not found: missing.toml"
    );

    let json_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
    let error: PrefixIndexError = json_error.into();
    assert!(matches!(error, PrefixIndexError::Serialization(_)));
}

/// Test the display of configuration errors.
#[test]
fn test_config_error_display() {
    let err = ConfigError::ValidationError("max_suggestions must be greater than 0".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration validation error: max_suggestions must be greater than 0"
    );

    let err = ConfigError::ParseError("bad".to_string());
    assert_eq!(err.to_string(), "Failed to parse configuration file: bad");
}

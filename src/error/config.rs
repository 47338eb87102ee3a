//! Errors raised while loading the prefix index settings.

use std::path::PathBuf;
use thiserror::Error;

/// Why a settings file or environment override could not be turned into a
/// usable [`PrefixIndexConfig`](crate::config::PrefixIndexConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `--config` path does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file has an unsupported extension or could not be deserialized.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// A value was read but is out of range, such as an unknown log level.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

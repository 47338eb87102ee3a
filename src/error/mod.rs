//! Error module for the prefix index.
//!
//! The trie engine itself is infallible; these errors cover the tooling
//! around it: configuration loading, catalog files and serialization.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the prefix index tooling.
pub type PrefixIndexResult<T> = Result<T, PrefixIndexError>;

/// Core error enum for the prefix index.
#[derive(Error, Debug)]
pub enum PrefixIndexError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

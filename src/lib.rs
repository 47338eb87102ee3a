//! Prefix Index Library
//!
//! This library contains a prefix-tree index supporting exact lookup and
//! prefix-based autocomplete, plus the tooling used by the `prefix_index`
//! binary: configuration loading, catalog readers and error types.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_trie`]: the trie engine, payload resolution and
//!   tree rendering. Infallible, synchronous and free of I/O.
//! - [`catalog`]: word-list and fruit-catalogue sources.
//! - [`config`]: layered configuration (defaults, file, environment).
//! - [`error`]: error types for everything outside the engine.

pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the prefix index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

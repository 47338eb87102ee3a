//! Index configuration module.
//!
//! This module defines how keys are normalized before they reach the trie and
//! how suggestion lists are presented by the command-line tools.

use super::{ConfigResult, Validate};
use crate::data_structures::KeyNormalizer;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Lowercase keys before insertion and lookup
    pub case_fold: bool,

    /// Strip surrounding whitespace from keys
    pub trim: bool,

    /// Sort suggestions lexicographically instead of trie order
    pub sort_suggestions: bool,

    /// Maximum number of suggestions to show (None for all)
    pub max_suggestions: Option<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            case_fold: true,
            trim: true,
            sort_suggestions: false,
            max_suggestions: None,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_suggestions must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl IndexConfig {
    /// The key normalizer described by this configuration.
    pub fn normalizer(&self) -> KeyNormalizer {
        KeyNormalizer {
            case_fold: self.case_fold,
            trim: self.trim,
        }
    }

    /// Applies ordering and truncation to a suggestion list.
    ///
    /// `sort_key` extracts the text used for lexicographic sorting.
    pub fn present<T, K, F>(&self, mut items: Vec<T>, sort_key: F) -> Vec<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        if self.sort_suggestions {
            items.sort_by_key(sort_key);
        }
        if let Some(max) = self.max_suggestions {
            items.truncate(max);
        }
        items
    }
}

// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Key normalization applied before every insert and query.
//!
//! The trie compares raw symbols. Anything like case-insensitive lookup has
//! to be applied by the caller, the same way, on both sides.

use std::borrow::Cow;

/// Normalization rules for string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNormalizer {
    /// Lowercase keys before use
    pub case_fold: bool,

    /// Strip leading and trailing whitespace
    pub trim: bool,
}

impl KeyNormalizer {
    /// A normalizer that leaves keys untouched.
    pub const fn identity() -> Self {
        Self {
            case_fold: false,
            trim: false,
        }
    }

    /// A normalizer that lowercases keys.
    pub const fn case_insensitive() -> Self {
        Self {
            case_fold: true,
            trim: false,
        }
    }

    /// Normalizes `key`, borrowing it when no rule changes anything.
    pub fn normalize<'a>(&self, key: &'a str) -> Cow<'a, str> {
        let key = if self.trim { key.trim() } else { key };

        if self.case_fold && key.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
            Cow::Owned(key.to_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}

impl Default for KeyNormalizer {
    fn default() -> Self {
        Self::identity()
    }
}

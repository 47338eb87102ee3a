// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Payload resolution for suggestion results.
//!
//! A [`PayloadIndex`] maps complete keys to caller-owned values so that a
//! suggestion query can return rich results instead of bare keys. The trie
//! never owns the index; [`PayloadTrie`] bundles both stores for callers who
//! want them populated together.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{KeyNormalizer, PrefixTrie, Symbol};

/// A mapping from complete keys to associated values.
pub trait PayloadIndex<S: Symbol> {
    /// The value type stored for each key.
    type Value;

    /// Looks up the value stored for `key`.
    fn resolve(&self, key: &[S]) -> Option<&Self::Value>;
}

impl<V, H: BuildHasher> PayloadIndex<char> for HashMap<String, V, H> {
    type Value = V;

    fn resolve(&self, key: &[char]) -> Option<&V> {
        self.get(&key.iter().collect::<String>())
    }
}

impl<V, H: BuildHasher> PayloadIndex<char> for hashbrown::HashMap<String, V, H> {
    type Value = V;

    fn resolve(&self, key: &[char]) -> Option<&V> {
        self.get(&key.iter().collect::<String>())
    }
}

impl<V> PayloadIndex<char> for BTreeMap<String, V> {
    type Value = V;

    fn resolve(&self, key: &[char]) -> Option<&V> {
        self.get(&key.iter().collect::<String>())
    }
}

impl<S: Symbol, V, H: BuildHasher> PayloadIndex<S> for HashMap<Vec<S>, V, H> {
    type Value = V;

    fn resolve(&self, key: &[S]) -> Option<&V> {
        self.get(key)
    }
}

impl<S: Symbol, V> PayloadIndex<S> for BTreeMap<Vec<S>, V> {
    type Value = V;

    fn resolve(&self, key: &[S]) -> Option<&V> {
        self.get(key)
    }
}

/// A name trie with reverse lookup from each name to its record.
///
/// Every key goes through the same [`KeyNormalizer`] on insert and on query,
/// and `insert_with_payload` writes the trie and the payload map in one step,
/// so the two stores cannot drift apart through this type.
#[derive(Debug, Clone)]
pub struct PayloadTrie<V> {
    trie: PrefixTrie<char>,
    payloads: hashbrown::HashMap<String, V>,
    normalizer: KeyNormalizer,
}

impl<V> PayloadTrie<V> {
    /// Creates an empty case-insensitive `PayloadTrie`.
    pub fn new() -> Self {
        Self::with_normalizer(KeyNormalizer::case_insensitive())
    }

    /// Creates an empty `PayloadTrie` using the given normalization rules.
    pub fn with_normalizer(normalizer: KeyNormalizer) -> Self {
        Self {
            trie: PrefixTrie::new(),
            payloads: hashbrown::HashMap::new(),
            normalizer,
        }
    }

    /// Indexes `value` under `key`.
    ///
    /// # Returns
    ///
    /// The payload previously stored under the same normalized key, if any.
    /// The new value replaces it.
    pub fn insert_with_payload(&mut self, key: &str, value: V) -> Option<V> {
        let key = self.normalizer.normalize(key).into_owned();
        self.trie.insert(key.chars());
        self.payloads.insert(key, value)
    }

    /// Returns the payloads of every key starting with `prefix`.
    pub fn get_suggestions_with_payload(&self, prefix: &str) -> Vec<&V> {
        let prefix = self.normalizer.normalize(prefix);
        self.trie
            .get_suggestions_with_payload(prefix.chars(), &self.payloads)
    }

    /// Returns every normalized key starting with `prefix`.
    pub fn get_suggestions(&self, prefix: &str) -> Vec<String> {
        self.trie
            .get_suggestions(self.normalizer.normalize(prefix).chars())
    }

    /// Returns the payload stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.payloads.get(&*self.normalizer.normalize(key))
    }

    /// Checks whether `key` is indexed.
    pub fn search(&self, key: &str) -> bool {
        self.trie.search(self.normalizer.normalize(key).chars())
    }

    /// Checks whether any indexed key starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trie
            .starts_with(self.normalizer.normalize(prefix).chars())
    }

    /// Number of indexed keys.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The normalization rules in use.
    pub fn normalizer(&self) -> KeyNormalizer {
        self.normalizer
    }

    /// The underlying trie of normalized keys.
    pub fn trie(&self) -> &PrefixTrie<char> {
        &self.trie
    }
}

impl<V> Default for PayloadTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie Implementation
//!
//! This module provides a prefix tree supporting exact lookup, prefix checks
//! and autocomplete suggestions over keys made of arbitrary symbols.
//!
//! # Key Features
//!
//! * Generic over the edge symbol (`char` by default, `u8` for byte keys)
//! * Deterministic suggestion order (children are visited in first-creation order)
//! * Suggestions can be resolved through a caller-owned [`PayloadIndex`]
//! * Read-only operations never create nodes
//!
//! # Concurrency
//!
//! The trie is a plain owned value. Inserting needs `&mut self`, so sharing a
//! trie between writers and readers requires the caller to wrap it in a lock.
//!
//! # Example
//!
//! ```
//! use prefix_index_lib::data_structures::prefix_trie::PrefixTrie;
//!
//! let mut trie = PrefixTrie::new();
//! for word in ["apple", "application", "apply", "banana"] {
//!     trie.insert(word.chars());
//! }
//!
//! assert!(trie.search("apple".chars()));
//! assert!(!trie.search("app".chars()));
//! assert!(trie.starts_with("app".chars()));
//!
//! let words: Vec<String> = trie.get_suggestions("app".chars());
//! assert_eq!(words, vec!["apple", "application", "apply"]);
//! ```

mod node;
mod normalize;
mod payload;
mod render;

pub use node::{Symbol, TrieNode};
pub use normalize::KeyNormalizer;
pub use payload::{PayloadIndex, PayloadTrie};

/// A prefix tree over keys made of `S` symbols.
///
/// The trie owns its root node, and every node owns its children, so the
/// lifetime of the trie bounds the lifetime of the whole tree.
#[derive(Debug, Clone)]
pub struct PrefixTrie<S: Symbol = char> {
    /// The root node, representing the empty prefix
    root: TrieNode<S>,

    /// Number of distinct keys inserted
    len: usize,
}

impl<S: Symbol> PrefixTrie<S> {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts a key into the trie.
    ///
    /// Missing nodes are created one per symbol; the node reached after the
    /// last symbol is marked as the end of a key. The empty key marks the root.
    ///
    /// # Returns
    ///
    /// `true` if the key was not present before, `false` if it already was.
    /// Inserting a present key leaves the trie unchanged.
    pub fn insert<K>(&mut self, key: K) -> bool
    where
        K: IntoIterator<Item = S>,
    {
        let node = key
            .into_iter()
            .fold(&mut self.root, |node, symbol| node.child_or_insert(symbol));

        let is_new = !node.is_end_of_key;
        node.is_end_of_key = true;
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Checks whether `key` was inserted as a complete key.
    pub fn search<K>(&self, key: K) -> bool
    where
        K: IntoIterator<Item = S>,
    {
        self.find_node(key).is_some_and(TrieNode::is_end_of_key)
    }

    /// Checks whether any inserted key starts with `prefix`.
    ///
    /// A prefix that was itself inserted counts, and the empty prefix matches
    /// every trie, including an empty one.
    pub fn starts_with<K>(&self, prefix: K) -> bool
    where
        K: IntoIterator<Item = S>,
    {
        self.find_node(prefix).is_some()
    }

    /// Returns every inserted key that starts with `prefix`.
    ///
    /// Keys are produced depth-first, visiting children in the order they were
    /// first created. Callers that need lexicographic order must sort. An
    /// unknown prefix yields an empty vector.
    ///
    /// The output type is any collection buildable from symbols, so a
    /// `PrefixTrie<char>` can produce `String`s and a `PrefixTrie<u8>` can
    /// produce `Vec<u8>`s.
    pub fn get_suggestions<P, K>(&self, prefix: P) -> Vec<K>
    where
        P: IntoIterator<Item = S>,
        K: FromIterator<S>,
    {
        let mut suggestions = Vec::new();
        self.visit_suggestions(prefix, |key| {
            suggestions.push(key.iter().cloned().collect());
        });
        suggestions
    }

    /// Returns the payloads of every inserted key that starts with `prefix`.
    ///
    /// Enumeration order matches [`get_suggestions`](Self::get_suggestions).
    /// A key that has no entry in `index` is skipped: the trie and the index
    /// are expected to be populated together, so a gap means the caller let
    /// them drift apart.
    pub fn get_suggestions_with_payload<'a, P, I>(
        &self,
        prefix: P,
        index: &'a I,
    ) -> Vec<&'a I::Value>
    where
        P: IntoIterator<Item = S>,
        I: PayloadIndex<S> + ?Sized,
    {
        let mut payloads = Vec::new();
        self.visit_suggestions(prefix, |key| match index.resolve(key) {
            Some(value) => payloads.push(value),
            None => tracing::debug!(?key, "suggestion has no payload entry, skipping"),
        });
        payloads
    }

    /// Number of distinct keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the trie, including the root.
    ///
    /// This walks the whole tree, so it is an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<S> {
        &self.root
    }

    /// Follows `key` from the root without creating anything.
    fn find_node<K>(&self, key: K) -> Option<&TrieNode<S>>
    where
        K: IntoIterator<Item = S>,
    {
        key.into_iter()
            .try_fold(&self.root, |node, symbol| node.child(&symbol))
    }

    /// Calls `emit` with every complete key below `prefix`, in pre-order.
    ///
    /// Uses an explicit stack of child iterators so that long keys cannot
    /// overflow the call stack. `buffer` always holds the symbols of the path
    /// from the root to the node whose children are on top of the stack.
    fn visit_suggestions<P, F>(&self, prefix: P, mut emit: F)
    where
        P: IntoIterator<Item = S>,
        F: FnMut(&[S]),
    {
        let mut buffer: Vec<S> = Vec::new();
        let mut start = &self.root;
        for symbol in prefix {
            match start.child(&symbol) {
                Some(next) => start = next,
                None => return,
            }
            buffer.push(symbol);
        }

        if start.is_end_of_key {
            emit(buffer.as_slice());
        }

        let mut stack = vec![start.children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((symbol, child)) => {
                    buffer.push(symbol.clone());
                    if child.is_end_of_key {
                        emit(buffer.as_slice());
                    }
                    stack.push(child.children.iter());
                }
                None => {
                    stack.pop();
                    // the prefix itself stays in the buffer
                    if !stack.is_empty() {
                        buffer.pop();
                    }
                }
            }
        }
    }
}

impl<S: Symbol> Default for PrefixTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K> Extend<K> for PrefixTrie<S>
where
    S: Symbol,
    K: IntoIterator<Item = S>,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, keys: T) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<S, K> FromIterator<K> for PrefixTrie<S>
where
    S: Symbol,
    K: IntoIterator<Item = S>,
{
    fn from_iter<T: IntoIterator<Item = K>>(keys: T) -> Self {
        let mut trie = Self::new();
        trie.extend(keys);
        trie
    }
}

//! Data structures for the prefix index.
//!
//! This module contains the prefix trie engine and its companions:
//! - Node store with first-creation child ordering
//! - Payload resolution for rich suggestion results
//! - Diagnostic tree rendering

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{KeyNormalizer, PayloadIndex, PayloadTrie, PrefixTrie, Symbol};

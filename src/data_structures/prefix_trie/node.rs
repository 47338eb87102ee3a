// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix trie.
//!
//! Each node exclusively owns its children, so the whole index is a plain
//! ownership tree rooted at [`PrefixTrie`](super::PrefixTrie).

use std::fmt;
use std::hash::Hash;

use fnv::FnvBuildHasher;
use indexmap::{map, IndexMap};

/// A symbol that can label a trie edge.
///
/// Implemented for every type that is cheap to compare, hash and order,
/// which covers `char`, `u8`, `u16` and most small enums.
pub trait Symbol: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// Child edges of a node, iterated in first-creation order.
pub(crate) type Children<S> = IndexMap<S, TrieNode<S>, FnvBuildHasher>;

/// A node in the prefix trie.
///
/// The node itself carries no symbol; the symbol lives on the edge in the
/// parent's `children` map.
pub struct TrieNode<S: Symbol> {
    /// Map of symbols to child nodes
    pub(crate) children: Children<S>,

    /// Whether a complete key terminates at this node
    pub(crate) is_end_of_key: bool,
}

impl<S: Symbol> TrieNode<S> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: Children::default(),
            is_end_of_key: false,
        }
    }

    /// Returns the child reached by `symbol`, if any.
    pub fn child(&self, symbol: &S) -> Option<&TrieNode<S>> {
        self.children.get(symbol)
    }

    /// Returns the child reached by `symbol`, creating it when absent.
    pub(crate) fn child_or_insert(&mut self, symbol: S) -> &mut TrieNode<S> {
        self.children.entry(symbol).or_default()
    }

    /// Whether a complete key terminates at this node.
    pub fn is_end_of_key(&self) -> bool {
        self.is_end_of_key
    }

    /// Iterates over `(symbol, child)` edges in first-creation order.
    pub fn children(&self) -> impl Iterator<Item = (&S, &TrieNode<S>)> {
        self.children.iter()
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl<S: Symbol> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node being copied: its source, the source children still to copy and the
/// copies made so far.
struct CloneFrame<'a, S: Symbol> {
    symbol: Option<S>,
    source: &'a TrieNode<S>,
    pending: map::Iter<'a, S, TrieNode<S>>,
    copied: Children<S>,
}

impl<'a, S: Symbol> CloneFrame<'a, S> {
    fn new(symbol: Option<S>, source: &'a TrieNode<S>) -> Self {
        Self {
            symbol,
            source,
            pending: source.children.iter(),
            copied: Children::with_capacity_and_hasher(source.children.len(), Default::default()),
        }
    }
}

impl<S: Symbol> Clone for TrieNode<S> {
    // Copies bottom-up with an explicit stack; child order is preserved.
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(None, self)];
        while let Some(mut frame) = stack.pop() {
            if let Some((symbol, child)) = frame.pending.next() {
                let next = CloneFrame::new(Some(symbol.clone()), child);
                stack.push(frame);
                stack.push(next);
                continue;
            }

            let node = TrieNode {
                children: frame.copied,
                is_end_of_key: frame.source.is_end_of_key,
            };
            match (stack.last_mut(), frame.symbol) {
                (Some(parent), Some(symbol)) => {
                    parent.copied.insert(symbol, node);
                }
                _ => return node,
            }
        }
        // the root frame is always the last one popped
        Self::new()
    }
}

impl<S: Symbol> Drop for TrieNode<S> {
    // Unlink descendants one by one so deep keys cannot overflow the stack.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<S>> =
            self.children.drain(..).map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

impl<S: Symbol> fmt::Debug for TrieNode<S> {
    // Only the outgoing edges, never the whole subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_end_of_key", &self.is_end_of_key)
            .field("edges", &self.children.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(depth: usize) -> TrieNode<char> {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..depth {
            node = node.child_or_insert('a');
        }
        node.is_end_of_key = true;
        root
    }

    #[test]
    fn test_clone_keeps_edge_order_and_flags() {
        let mut root = TrieNode::new();
        for word in ["cz", "ca", "c"] {
            let mut node = &mut root;
            for symbol in word.chars() {
                node = node.child_or_insert(symbol);
            }
            node.is_end_of_key = true;
        }

        let copy = root.clone();
        let c = copy.child(&'c').unwrap();
        assert!(c.is_end_of_key());
        let edges: Vec<char> = c.children().map(|(s, _)| *s).collect();
        assert_eq!(edges, vec!['z', 'a']);
        assert!(c.child(&'a').unwrap().is_end_of_key());
        assert_eq!(copy.subtree_size(), root.subtree_size());
    }

    #[test]
    fn test_deep_node_clone_and_drop() {
        let root = chain(100_000);
        let copy = root.clone();
        drop(root);
        assert_eq!(copy.subtree_size(), 100_001);
    }

    #[test]
    fn test_debug_is_shallow() {
        let rendered = format!("{:?}", chain(100_000));
        assert_eq!(rendered, "TrieNode { is_end_of_key: false, edges: ['a'], .. }");
    }
}

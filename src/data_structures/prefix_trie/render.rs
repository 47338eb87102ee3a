// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Text rendering of a trie for diagnostics.
//!
//! The output lists children in sorted symbol order, independent of the
//! first-creation order used by suggestion queries, and marks end-of-key nodes
//! with `*`. It is meant for humans and is not a stable format.

use std::fmt::{self, Display, Write};

use super::{PrefixTrie, Symbol, TrieNode};

const END_MARKER: &str = " *";

impl<S: Symbol + Display> PrefixTrie<S> {
    /// Renders the trie as an indented tree.
    ///
    /// ```
    /// use prefix_index_lib::data_structures::prefix_trie::PrefixTrie;
    ///
    /// let trie: PrefixTrie = ["bat", "ba"].iter().map(|w| w.chars()).collect();
    /// assert_eq!(trie.render(), "ROOT\n└── b\n    └── a *\n        └── t *\n");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_tree(&mut out);
        out
    }

    /// Writes the rendered tree into `out`.
    ///
    /// Walks the tree with an explicit stack of sorted child lists, so long
    /// keys cannot overflow the call stack.
    pub fn write_tree<W: Write>(&self, out: &mut W) -> fmt::Result {
        let root = self.root();
        let marker = if root.is_end_of_key() { END_MARKER } else { "" };
        writeln!(out, "ROOT{marker}")?;

        let mut indent = String::new();
        // each entry holds the children still to print and the indent width
        // in force before their parent's guide was appended
        let mut stack = vec![(sorted_children(root), 0)];
        while let Some((children, _)) = stack.last_mut() {
            match children.next() {
                Some((symbol, child)) => {
                    let is_last = children.as_slice().is_empty();
                    let branch = if is_last { "└── " } else { "├── " };
                    let marker = if child.is_end_of_key() { END_MARKER } else { "" };
                    writeln!(out, "{indent}{branch}{symbol}{marker}")?;

                    let width = indent.len();
                    indent.push_str(if is_last { "    " } else { "│   " });
                    stack.push((sorted_children(child), width));
                }
                None => {
                    if let Some((_, width)) = stack.pop() {
                        indent.truncate(width);
                    }
                }
            }
        }
        Ok(())
    }
}

fn sorted_children<S: Symbol>(node: &TrieNode<S>) -> std::vec::IntoIter<(&S, &TrieNode<S>)> {
    let mut children: Vec<_> = node.children().collect();
    children.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    children.into_iter()
}

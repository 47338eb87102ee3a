// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix trie.

use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

use crate::data_structures::prefix_trie::PrefixTrie;
use crate::tests::{key_set_strategy, key_strategy};

fn build(keys: &[String]) -> PrefixTrie {
    keys.iter().map(|k| k.chars()).collect()
}

fn proper_prefixes(key: &str) -> impl Iterator<Item = String> + '_ {
    let count = key.chars().count();
    (0..count).map(move |n| key.chars().take(n).collect())
}

proptest! {
    // Property: every inserted key can be found
    #[test]
    fn prop_inserted_keys_are_found(keys in key_set_strategy()) {
        let trie = build(&keys);
        for key in &keys {
            prop_assert!(trie.search(key.chars()));
            prop_assert!(trie.starts_with(key.chars()));
        }
    }

    // Property: every proper prefix of an inserted key is a prefix of the trie
    #[test]
    fn prop_proper_prefixes_match(keys in key_set_strategy()) {
        let trie = build(&keys);
        for key in &keys {
            for prefix in proper_prefixes(key) {
                prop_assert!(trie.starts_with(prefix.chars()));
            }
        }
    }

    // Property: search is true exactly for inserted keys
    #[test]
    fn prop_search_rejects_unknown_keys(keys in key_set_strategy(), probe in key_strategy()) {
        let trie = build(&keys);
        prop_assert_eq!(trie.search(probe.chars()), keys.contains(&probe));
    }

    // Property: inserting twice is observably the same as inserting once
    #[test]
    fn prop_insert_is_idempotent(keys in key_set_strategy(), probe in key_strategy()) {
        let once = build(&keys);
        let mut twice = build(&keys);
        twice.extend(keys.iter().map(|k| k.chars()));

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.search(probe.chars()), twice.search(probe.chars()));
        prop_assert_eq!(once.starts_with(probe.chars()), twice.starts_with(probe.chars()));
        prop_assert_eq!(
            once.get_suggestions::<_, String>(probe.chars()),
            twice.get_suggestions::<_, String>(probe.chars())
        );
    }

    // Property: suggestions are exactly the inserted keys sharing the prefix
    #[test]
    fn prop_suggestions_match_filter(keys in key_set_strategy(), prefix in key_strategy()) {
        let trie = build(&keys);
        let suggestions: Vec<String> = trie.get_suggestions(prefix.chars());
        let as_set: BTreeSet<String> = suggestions.iter().cloned().collect();
        let expected: BTreeSet<String> = keys
            .iter()
            .filter(|k| k.starts_with(prefix.as_str()))
            .cloned()
            .collect();

        // no key is reported twice
        prop_assert_eq!(suggestions.len(), as_set.len());
        prop_assert_eq!(as_set, expected);
    }

    // Property: the empty prefix enumerates every distinct key
    #[test]
    fn prop_empty_prefix_lists_everything(keys in key_set_strategy()) {
        let trie = build(&keys);
        let all: BTreeSet<String> = trie
            .get_suggestions::<_, String>("".chars())
            .into_iter()
            .collect();
        let expected: BTreeSet<String> = keys.iter().cloned().collect();

        prop_assert_eq!(trie.len(), expected.len());
        prop_assert_eq!(all, expected);
    }

    // Property: read-only queries never grow the node store
    #[test]
    fn prop_queries_do_not_mutate(keys in key_set_strategy(), probe in key_strategy()) {
        let trie = build(&keys);
        let nodes = trie.node_count();
        let rendered = trie.render();

        let _ = trie.search(probe.chars());
        let _ = trie.starts_with(probe.chars());
        let _: Vec<String> = trie.get_suggestions(probe.chars());
        let _ = trie.get_suggestions_with_payload(probe.chars(), &HashMap::<String, ()>::new());

        prop_assert_eq!(trie.node_count(), nodes);
        prop_assert_eq!(trie.render(), rendered);
    }

    // Property: payload resolution drops exactly the keys missing from the index
    #[test]
    fn prop_payload_resolution_skips_missing(keys in key_set_strategy(), prefix in key_strategy()) {
        let trie = build(&keys);
        let index: HashMap<String, usize> = keys
            .iter()
            .filter(|k| k.chars().count() % 2 == 0)
            .map(|k| (k.clone(), k.chars().count()))
            .collect();

        let suggestions: Vec<String> = trie.get_suggestions(prefix.chars());
        let expected: Vec<&usize> = suggestions.iter().filter_map(|k| index.get(k)).collect();
        prop_assert_eq!(trie.get_suggestions_with_payload(prefix.chars(), &index), expected);
    }
}

//! Key sources for building indexes.
//!
//! Word lists are plain text with one key per line. Fruit catalogues are JSON
//! arrays of [`Fruit`] records and feed a [`PayloadTrie`] so autocomplete can
//! return whole records.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::data_structures::{KeyNormalizer, PayloadTrie};
use crate::error::PrefixIndexResult;

/// A fruit record, indexed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    /// Display name, also the autocomplete key
    pub name: String,

    /// Dominant skin color
    pub color: String,

    /// Region the fruit is associated with
    pub region: String,
}

impl Fruit {
    /// Creates a fruit record.
    pub fn new(name: &str, color: &str, region: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            region: region.to_string(),
        }
    }
}

static SAMPLE_FRUITS: Lazy<Vec<Fruit>> = Lazy::new(|| {
    [
        ("Apple", "Red", "North America"),
        ("Apricot", "Orange", "Europe"),
        ("Banana", "Yellow", "South America"),
        ("Cherry", "Red", "Europe"),
        ("Coconut", "Brown", "Pacific Islands"),
        ("Blood Orange", "Orange", "Mediterranean"),
        ("Blueberry", "Blue", "North America"),
        ("Cantaloupe", "Orange", "Middle East"),
        ("Dragon Fruit", "Pink", "Asia"),
        ("Grape", "Purple", "Europe"),
        ("Grapefruit", "Pink", "Caribbean"),
        ("Guava", "Green", "South America"),
        ("Key Lime", "Green", "Caribbean"),
        ("Kiwi", "Brown", "Pacific Islands"),
        ("Lychee", "Red", "Asia"),
        ("Mango", "Yellow", "Asia"),
        ("Mangosteen", "Purple", "Asia"),
        ("Papaya", "Orange", "South America"),
        ("Passion Fruit", "Purple", "South America"),
        ("Pineapple", "Yellow", "South America"),
        ("Plum", "Purple", "Europe"),
        ("Pomegranate", "Red", "Middle East"),
        ("Yuzu", "Yellow", "Asia"),
    ]
    .into_iter()
    .map(|(name, color, region)| Fruit::new(name, color, region))
    .collect()
});

/// The built-in sample catalogue.
pub fn sample_fruits() -> &'static [Fruit] {
    &SAMPLE_FRUITS
}

/// Reads a word list with one key per line.
///
/// Line endings are stripped and blank lines are skipped; any other
/// normalization is left to the index.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> PrefixIndexResult<Vec<String>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let words: Vec<String> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!(path = %path.as_ref().display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Reads a fruit catalogue from a JSON array.
pub fn read_fruit_catalog<P: AsRef<Path>>(path: P) -> PrefixIndexResult<Vec<Fruit>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let fruits: Vec<Fruit> = serde_json::from_str(&contents)?;

    tracing::debug!(
        path = %path.as_ref().display(),
        count = fruits.len(),
        "fruit catalogue loaded"
    );
    Ok(fruits)
}

/// Indexes fruits by name.
///
/// Later records replace earlier ones whose names normalize to the same key.
pub fn build_fruit_index<'a, I>(fruits: I, normalizer: KeyNormalizer) -> PayloadTrie<Fruit>
where
    I: IntoIterator<Item = &'a Fruit>,
{
    let mut index = PayloadTrie::with_normalizer(normalizer);
    for fruit in fruits {
        if index.insert_with_payload(&fruit.name, fruit.clone()).is_some() {
            tracing::debug!(name = %fruit.name, "duplicate fruit name replaced");
        }
    }
    index
}

//! Keyed target-word catalog
//!
//! An immutable mapping from integer key to word, partitioned by word length.
//! Keys are what share links carry, so a key must always resolve to the same word.

use super::CATALOG;
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// A catalog word together with its key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry<'a> {
    pub key: i64,
    pub word: &'a str,
}

/// Target words indexed by key and by length
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: FxHashMap<i64, String>,
    by_length: FxHashMap<usize, Vec<i64>>,
}

impl WordCatalog {
    /// Build a catalog from `(key, word)` pairs
    ///
    /// Invalid words are skipped. If a key repeats, the first entry is kept.
    ///
    /// # Examples
    /// ```
    /// use infinite_wordle::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_entries([(7, "world"), (9, "puzzle")]);
    /// assert_eq!(catalog.get(9).map(|e| e.word), Some("puzzle"));
    /// assert_eq!(catalog.keys_with_length(5), &[7]);
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: AsRef<str>,
    {
        let mut catalog = Self::default();

        for (key, text) in entries {
            let word = match Word::new(text.as_ref()) {
                Ok(word) => word,
                Err(e) => {
                    log::debug!("Skipping catalog entry {key} ({:?}): {e}", text.as_ref());
                    continue;
                }
            };

            if catalog.words.contains_key(&key) {
                log::warn!("Duplicate catalog key {key}, keeping first entry");
                continue;
            }

            catalog.by_length.entry(word.len()).or_default().push(key);
            catalog.words.insert(key, word.into_string());
        }

        // Stable order so a seeded RNG always picks the same entry
        for keys in catalog.by_length.values_mut() {
            keys.sort_unstable();
        }

        catalog
    }

    /// Build a catalog keyed by position in the list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(
            words
                .into_iter()
                .enumerate()
                .map(|(index, word)| (index as i64, word)),
        )
    }

    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(CATALOG.iter().copied())
    }

    /// Load a catalog file, one word per line keyed by line position
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        super::loader::load_catalog(path)
    }

    /// Exact lookup by key
    #[must_use]
    pub fn get(&self, key: i64) -> Option<WordEntry<'_>> {
        self.words.get(&key).map(|word| WordEntry { key, word })
    }

    /// Keys of all words with the given length, in ascending order
    #[must_use]
    pub fn keys_with_length(&self, length: usize) -> &[i64] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Iterate over every word in the catalog (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.values().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

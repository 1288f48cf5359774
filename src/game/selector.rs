//! Target word selection
//!
//! Random selection among words of a given length, or exact selection by key.
//! When the catalog cannot supply a word, a built-in fallback is used so the
//! engine never ends up without a target.

use super::state::NO_KEY;
use crate::wordlists::{WordCatalog, WordEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Built-in target used when the catalog has no suitable word
///
/// # Examples
/// ```
/// use infinite_wordle::game::fallback_word;
///
/// assert_eq!(fallback_word(6), "puzzle");
/// assert_eq!(fallback_word(3), "fallback");
/// ```
#[must_use]
pub const fn fallback_word(length: usize) -> &'static str {
    match length {
        5 => "world",
        6 => "puzzle",
        7 => "wordles",
        _ => "fallback",
    }
}

/// A resolved target word with its catalog key ([`NO_KEY`] for fallbacks)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub key: i64,
    pub word: String,
}

impl Target {
    fn fallback(length: usize) -> Self {
        Self {
            key: NO_KEY,
            word: fallback_word(length).to_string(),
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.key == NO_KEY
    }
}

impl From<WordEntry<'_>> for Target {
    fn from(entry: WordEntry<'_>) -> Self {
        Self {
            key: entry.key,
            word: entry.word.to_string(),
        }
    }
}

/// Chooses target words from a catalog
pub struct WordSelector<'a> {
    catalog: &'a WordCatalog,
    rng: StdRng,
}

impl<'a> WordSelector<'a> {
    /// Selector seeded from the operating system
    #[must_use]
    pub fn new(catalog: &'a WordCatalog) -> Self {
        Self {
            catalog,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Selector with a fixed RNG seed, for reproducible random picks
    #[must_use]
    pub fn with_rng_seed(catalog: &'a WordCatalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick uniformly among catalog words of `length`
    ///
    /// Returns `None` when the catalog has no word of that length.
    pub fn choose_random(&mut self, length: usize) -> Option<WordEntry<'a>> {
        let catalog = self.catalog;
        let &key = catalog.keys_with_length(length).choose(&mut self.rng)?;
        catalog.get(key)
    }

    /// Exact lookup; independent of the RNG
    #[must_use]
    pub fn choose_by_key(&self, key: i64) -> Option<WordEntry<'a>> {
        self.catalog.get(key)
    }

    /// Random target of `length`, or the fallback word if none exists
    pub fn random_target(&mut self, length: usize) -> Target {
        if let Some(entry) = self.choose_random(length) {
            return entry.into();
        }
        log::error!("Failed to choose random word for length {length}, using fallback");
        Target::fallback(length)
    }

    /// Target for a seed key, or the fallback word of `length` if the key is unknown
    #[must_use]
    pub fn seeded_target(&self, key: i64, length: usize) -> Target {
        if let Some(entry) = self.choose_by_key(key) {
            return entry.into();
        }
        log::error!("No word found for seed {key}, using fallback");
        Target::fallback(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> WordCatalog {
        WordCatalog::from_entries([
            (10, "apple"),
            (11, "grape"),
            (12, "lemon"),
            (20, "banana"),
            (30, "balance"),
        ])
    }

    #[test]
    fn fallback_is_total() {
        assert_eq!(fallback_word(5), "world");
        assert_eq!(fallback_word(6), "puzzle");
        assert_eq!(fallback_word(7), "wordles");
        assert_eq!(fallback_word(0), "fallback");
        assert_eq!(fallback_word(12), "fallback");
    }

    #[test]
    fn random_choice_respects_length() {
        let catalog = sample_catalog();
        let mut selector = WordSelector::new(&catalog);
        for _ in 0..50 {
            let entry = selector.choose_random(5).unwrap();
            assert_eq!(entry.word.len(), 5);
            assert_eq!(catalog.get(entry.key), Some(entry));
        }
        assert_eq!(selector.choose_random(6).unwrap().word, "banana");
    }

    #[test]
    fn random_choice_empty_pool() {
        let catalog = sample_catalog();
        let mut selector = WordSelector::new(&catalog);
        assert!(selector.choose_random(4).is_none());
    }

    #[test]
    fn random_choice_covers_pool() {
        let catalog = sample_catalog();
        let mut selector = WordSelector::with_rng_seed(&catalog, 7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(selector.choose_random(5).unwrap().key);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let catalog = sample_catalog();
        let mut a = WordSelector::with_rng_seed(&catalog, 42);
        let mut b = WordSelector::with_rng_seed(&catalog, 42);
        for _ in 0..10 {
            assert_eq!(a.choose_random(5), b.choose_random(5));
        }
    }

    #[test]
    fn key_lookup_ignores_rng_state() {
        let catalog = sample_catalog();
        let mut selector = WordSelector::with_rng_seed(&catalog, 1);
        let before = selector.choose_by_key(11);
        for _ in 0..5 {
            selector.choose_random(5);
        }
        assert_eq!(selector.choose_by_key(11), before);
        assert_eq!(before.map(|e| e.word), Some("grape"));
    }

    #[test]
    fn random_target_falls_back() {
        let catalog = WordCatalog::default();
        let mut selector = WordSelector::new(&catalog);
        let target = selector.random_target(6);
        assert_eq!(target.word, "puzzle");
        assert_eq!(target.key, NO_KEY);
        assert!(target.is_fallback());
    }

    #[test]
    fn seeded_target_hit_and_miss() {
        let catalog = sample_catalog();
        let selector = WordSelector::new(&catalog);

        let hit = selector.seeded_target(30, 5);
        assert_eq!(
            hit,
            Target {
                key: 30,
                word: "balance".to_string()
            }
        );

        let miss = selector.seeded_target(999, 7);
        assert_eq!(miss.word, "wordles");
        assert!(miss.is_fallback());
    }
}

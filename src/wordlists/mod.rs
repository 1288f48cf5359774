//! Word lists and the keyed target catalog
//!
//! Provides the embedded catalog compiled into the binary and loaders for
//! custom lists.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{WordCatalog, WordEntry};
pub use embedded::{ALLOWED, ALLOWED_COUNT, CATALOG, CATALOG_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTHS;

    #[test]
    fn catalog_count_matches_const() {
        assert_eq!(CATALOG.len(), CATALOG_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn catalog_keys_are_line_indices() {
        for (index, &(key, _)) in CATALOG.iter().enumerate() {
            assert_eq!(key, index as i64);
        }
    }

    #[test]
    fn catalog_words_are_playable() {
        for &(key, word) in CATALOG {
            assert!(
                WORD_LENGTHS.contains(&word.len()),
                "Word '{word}' (key {key}) has unsupported length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn every_length_has_targets() {
        let catalog = WordCatalog::embedded();
        for length in WORD_LENGTHS {
            assert!(
                !catalog.keys_with_length(length).is_empty(),
                "No {length}-letter targets"
            );
        }
    }

    #[test]
    fn allowed_words_are_lowercase() {
        for &word in ALLOWED {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}

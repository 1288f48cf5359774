//! Word list loading utilities
//!
//! Reads custom catalogs in the same one-word-per-line layout as the embedded one.

use super::WordCatalog;
use std::fs;
use std::io;
use std::path::Path;

/// Load a target catalog from a file
///
/// One word per line; blank lines are ignored and each remaining line's
/// zero-based position is its key, the same layout as the embedded catalog.
/// Invalid words are skipped without shifting later keys.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use infinite_wordle::wordlists::loader::load_catalog;
///
/// let catalog = load_catalog("data/catalog.txt").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> io::Result<WordCatalog> {
    let content = fs::read_to_string(path)?;
    Ok(parse_catalog(&content))
}

fn parse_catalog(content: &str) -> WordCatalog {
    WordCatalog::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

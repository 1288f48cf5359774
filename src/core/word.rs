//! Word representation
//!
//! A Word is a validated, lowercased ASCII word of any supported length.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Word lengths a game can be played with
pub const WORD_LENGTHS: [usize; 3] = [5, 6, 7];

/// Length used when nothing else is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Check whether a game can be played with words of this length
#[inline]
#[must_use]
pub fn is_supported_length(length: usize) -> bool {
    WORD_LENGTHS.contains(&length)
}

/// A lowercase ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("Word must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use infinite_wordle::core::Word;
    ///
    /// let word = Word::new("Puzzle").unwrap();
    /// assert_eq!(word.text(), "puzzle");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Create a Word and require a specific length
    ///
    /// # Errors
    /// Returns `WordError::WrongLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl Into<String>, expected: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == expected {
            Ok(word)
        } else {
            Err(WordError::WrongLength {
                expected,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the word and return its text
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Count the occurrences of each letter in a byte string
///
/// Used for feedback calculation with duplicate letters.
#[inline]
pub(crate) fn letter_counts(letters: &[u8]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

//! Per-letter guess feedback
//!
//! Each letter of a submitted guess is classified as:
//! - Correct (right letter, right position)
//! - Present (letter in the target, wrong position)
//! - Absent (letter not in the target, or all its occurrences already claimed)

use super::word::letter_counts;
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered so that a better status compares greater: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used in share grids
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feedback for one submitted guess, one status per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Exact matches always win. Remaining occurrences of a letter are then
    /// claimed left to right, so a letter is never marked more often than it
    /// appears in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present letters, left to right, from what is left
    ///
    /// # Examples
    /// ```
    /// use infinite_wordle::core::{Feedback, LetterStatus::*};
    ///
    /// let feedback = Feedback::evaluate("grape", "apple");
    /// assert_eq!(feedback.statuses(), &[Absent, Absent, Present, Present, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &str, target: &str) -> Self {
        let guess = guess.as_bytes();
        let target = target.as_bytes();

        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut available = letter_counts(target);

        // First pass: exact position matches
        for (i, &letter) in guess.iter().enumerate() {
            if target.get(i) == Some(&letter) {
                result[i] = LetterStatus::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: claim what is left, earliest position first
        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Render as a row of emoji squares, e.g. "⬛⬛🟨🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.glyph()).collect()
    }
}

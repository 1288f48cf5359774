//! Letter-wide status aggregation for the on-screen keyboard

use super::{Feedback, LetterStatus};
use rustc_hash::FxHashMap;

/// QWERTY layout used by the interfaces
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best status seen for each letter across all submitted guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    /// Aggregate feedback over every submitted guess
    ///
    /// `Correct` dominates `Present`, which dominates `Absent`.
    ///
    /// # Examples
    /// ```
    /// use infinite_wordle::core::{KeyboardState, LetterStatus};
    ///
    /// let keys = KeyboardState::from_guesses(["grape", "apple"], "apple");
    /// assert_eq!(keys.status('A'), Some(LetterStatus::Correct));
    /// assert_eq!(keys.status('g'), Some(LetterStatus::Absent));
    /// assert_eq!(keys.status('z'), None);
    /// ```
    #[must_use]
    pub fn from_guesses<I, S>(guesses: I, target: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::default();
        if target.is_empty() {
            return state;
        }

        let target = target.to_ascii_lowercase();
        for guess in guesses {
            let guess = guess.as_ref().to_ascii_lowercase();
            let feedback = Feedback::evaluate(&guess, &target);
            for (&letter, &status) in guess.as_bytes().iter().zip(feedback.statuses()) {
                state.record(letter, status);
            }
        }
        state
    }

    fn record(&mut self, letter: u8, status: LetterStatus) {
        let best = self.letters.entry(letter).or_insert(status);
        if status > *best {
            *best = status;
        }
    }

    /// Status for a key, case-insensitively; `None` if the letter was never guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_lowercase() as u8))
            .copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_without_guesses() {
        let keys = KeyboardState::from_guesses(Vec::<String>::new(), "apple");
        assert!(keys.is_empty());
    }

    #[test]
    fn empty_without_target() {
        let keys = KeyboardState::from_guesses(["grape"], "");
        assert!(keys.is_empty());
    }

    #[test]
    fn best_status_wins_across_guesses() {
        // 'p' is present in grape, correct in apply
        let keys = KeyboardState::from_guesses(["grape", "apply"], "apple");
        assert_eq!(keys.status('p'), Some(LetterStatus::Correct));
        assert_eq!(keys.status('e'), Some(LetterStatus::Correct));
        assert_eq!(keys.status('r'), Some(LetterStatus::Absent));
        assert_eq!(keys.status('y'), Some(LetterStatus::Absent));
    }

    #[test]
    fn correct_is_not_downgraded_by_later_guess() {
        let keys = KeyboardState::from_guesses(["apple", "grape"], "apple");
        assert_eq!(keys.status('a'), Some(LetterStatus::Correct));
    }

    #[test]
    fn duplicate_copy_absent_does_not_hide_present() {
        // second 'e' in eerie is absent, but r is present and the last e correct
        let keys = KeyboardState::from_guesses(["eerie"], "crane");
        assert_eq!(keys.status('e'), Some(LetterStatus::Correct));
        assert_eq!(keys.status('r'), Some(LetterStatus::Present));
        assert_eq!(keys.status('i'), Some(LetterStatus::Absent));
    }

    #[test]
    fn case_insensitive() {
        let keys = KeyboardState::from_guesses(["GRAPE"], "Apple");
        assert_eq!(keys.status('E'), Some(LetterStatus::Correct));
        assert_eq!(keys.status('e'), Some(LetterStatus::Correct));
        assert_eq!(keys.status('1'), None);
    }

    #[test]
    fn layout_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }
}

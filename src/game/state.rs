//! The persisted game snapshot

use crate::core::{DEFAULT_WORD_LENGTH, Feedback, KeyboardState};
use serde::{Deserialize, Serialize};

/// Number of guesses a player gets
pub const MAX_GUESSES: usize = 6;

/// Key recorded for targets that did not come from the catalog
pub const NO_KEY: i64 = -1;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Uninitialized,
    InProgress,
    Won,
    Lost,
}

/// Complete game state, serialized as a single JSON record
///
/// Field names are camelCase on the wire so that saved games stay compatible
/// with the browser client's `wordleState` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub word_length: usize,
    /// Empty until the first initialization
    pub target_word: String,
    pub target_word_key: i64,
    pub guesses: Vec<String>,
    pub current_guess: String,
    pub message: String,
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            target_word: String::new(),
            target_word_key: NO_KEY,
            guesses: Vec::new(),
            current_guess: String::new(),
            message: String::new(),
            game_over: false,
        }
    }
}

impl GameState {
    /// A fresh round for the given target
    #[must_use]
    pub fn fresh(word_length: usize, target_word: String, target_word_key: i64) -> Self {
        Self {
            word_length,
            target_word,
            target_word_key,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.target_word.is_empty()
    }

    /// Whether resetting would throw away any player input
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.guesses.is_empty() || !self.current_guess.is_empty()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_initialized() && self.guesses.iter().any(|g| *g == self.target_word)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if !self.is_initialized() {
            GamePhase::Uninitialized
        } else if self.is_won() {
            GamePhase::Won
        } else if self.game_over {
            GamePhase::Lost
        } else {
            GamePhase::InProgress
        }
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Feedback for every submitted guess, in submission order
    #[must_use]
    pub fn feedback(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::evaluate(guess, &self.target_word))
            .collect()
    }

    /// Aggregated letter statuses for the keyboard
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_guesses(&self.guesses, &self.target_word)
    }

    /// Structural checks applied to snapshots read back from storage
    ///
    /// A snapshot that fails them is treated like a missing one.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let lengths_ok = self.current_guess.len() <= self.word_length
            && self.guesses.iter().all(|g| g.len() == self.word_length);
        let letters_ok = self
            .guesses
            .iter()
            .chain(std::iter::once(&self.current_guess))
            .all(|g| g.bytes().all(|b| b.is_ascii_lowercase()));
        let terminal_ok = self.game_over
            || (self.guesses.len() < MAX_GUESSES && !self.is_won());

        self.word_length > 0
            && self.guesses.len() <= MAX_GUESSES
            && lengths_ok
            && letters_ok
            && terminal_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(target: &str) -> GameState {
        GameState::fresh(target.len(), target.to_string(), 3)
    }

    #[test]
    fn default_is_uninitialized() {
        let state = GameState::default();
        assert_eq!(state.phase(), GamePhase::Uninitialized);
        assert_eq!(state.word_length, 5);
        assert_eq!(state.target_word_key, NO_KEY);
        assert!(!state.has_progress());
        assert!(state.is_consistent());
    }

    #[test]
    fn phases() {
        let mut state = playing("apple");
        assert_eq!(state.phase(), GamePhase::InProgress);

        state.guesses.push("apple".to_string());
        state.game_over = true;
        assert_eq!(state.phase(), GamePhase::Won);

        let mut state = playing("apple");
        state.guesses = vec!["grape".to_string(); MAX_GUESSES];
        state.game_over = true;
        assert_eq!(state.phase(), GamePhase::Lost);
    }

    #[test]
    fn progress_tracks_input_and_guesses() {
        let mut state = playing("apple");
        state.current_guess.push('a');
        assert!(state.has_progress());

        let mut state = playing("apple");
        state.guesses.push("grape".to_string());
        assert!(state.has_progress());
        assert_eq!(state.remaining_guesses(), 5);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut state = playing("apple");
        state.guesses.push("grape".to_string());
        state.current_guess = "le".to_string();

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["wordLength"], 5);
        assert_eq!(json["targetWord"], "apple");
        assert_eq!(json["targetWordKey"], 3);
        assert_eq!(json["guesses"][0], "grape");
        assert_eq!(json["currentGuess"], "le");
        assert_eq!(json["message"], "");
        assert_eq!(json["gameOver"], false);
    }

    #[test]
    fn reads_browser_record() {
        let json = r#"{"wordLength":6,"targetWord":"puzzle","targetWordKey":-1,
            "guesses":["bottle"],"currentGuess":"pu","message":"","gameOver":false}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.word_length, 6);
        assert_eq!(state.guesses, vec!["bottle".to_string()]);
        assert!(state.is_consistent());
    }

    #[test]
    fn inconsistent_snapshots() {
        let mut state = playing("apple");
        state.current_guess = "toolong".to_string();
        assert!(!state.is_consistent());

        let mut state = playing("apple");
        state.guesses = vec!["grape".to_string(); MAX_GUESSES + 1];
        state.game_over = true;
        assert!(!state.is_consistent());

        // six misses must be terminal
        let mut state = playing("apple");
        state.guesses = vec!["grape".to_string(); MAX_GUESSES];
        assert!(!state.is_consistent());

        // a win must be terminal
        let mut state = playing("apple");
        state.guesses.push("apple".to_string());
        assert!(!state.is_consistent());

        let mut state = playing("apple");
        state.guesses.push("GRAPE".to_string());
        assert!(!state.is_consistent());
    }

    #[test]
    fn feedback_per_guess() {
        let mut state = playing("apple");
        state.guesses = vec!["grape".to_string(), "apple".to_string()];
        let feedback = state.feedback();
        assert_eq!(feedback.len(), 2);
        assert!(!feedback[0].is_solved());
        assert!(feedback[1].is_solved());
    }
}

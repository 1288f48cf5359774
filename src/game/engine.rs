//! Game state machine
//!
//! [`GameEngine`] owns the authoritative [`GameState`] and is the only place it
//! changes. Every transition builds the next snapshot, hands it to the store,
//! and only then makes it the visible state. A failed save is logged and
//! otherwise ignored: the in-memory state stays authoritative for the session.

use super::selector::{Target, WordSelector};
use super::state::{GameState, MAX_GUESSES};
use super::validity::WordValidator;
use crate::core::is_supported_length;
use crate::share;
use crate::storage::GameStore;

pub const WIN_MESSAGE: &str = "Congratulations! You guessed the word.";
pub const INVALID_WORD_MESSAGE: &str = "Not a valid word.";
pub const SHARE_COPIED_MESSAGE: &str = "Results copied to clipboard!";
pub const SHARE_FAILED_MESSAGE: &str = "Failed to copy results.";

#[must_use]
pub fn wrong_length_message(word_length: usize) -> String {
    format!("Please enter a {word_length}-letter word.")
}

#[must_use]
pub fn loss_message(target_word: &str) -> String {
    format!("Game over. The word was: {target_word}")
}

/// Result of asking for a different word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthChange {
    /// Already playing with that length
    Unchanged,
    /// Only 5, 6 and 7 are offered
    Unsupported,
    /// Progress would be lost; ask the player and call again with `confirmed`
    NeedsConfirmation,
    /// A new round with the new length has started
    Reset,
}

/// What a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game is already over
    Ignored,
    WrongLength,
    Invalid,
    Accepted,
    Won,
    Lost,
}

/// A guess captured at submit time, waiting for its validity verdict
///
/// Input stays editable while the check is in flight; the captured word is
/// what gets recorded. The guess belongs to the round it was typed in and is
/// dropped if a new round starts before the verdict arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGuess {
    word: String,
    round: u64,
}

impl PendingGuess {
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// The game state machine, persisting through `S`
pub struct GameEngine<'a, S: GameStore> {
    selector: WordSelector<'a>,
    store: S,
    state: GameState,
    /// Set by the first `initialize` of this session
    initialized: bool,
    /// Bumped whenever a new round starts
    round: u64,
}

impl<'a, S: GameStore> GameEngine<'a, S> {
    /// Create an engine, restoring the saved game if there is a usable one
    ///
    /// Nothing is chosen yet; call [`GameEngine::start`] once per session.
    pub fn new(selector: WordSelector<'a>, store: S) -> Self {
        let state = match store.load_saved() {
            Some(saved) if saved.is_consistent() => saved,
            Some(_) => {
                log::warn!("Discarding inconsistent saved game");
                GameState::default()
            }
            None => GameState::default(),
        };

        Self {
            selector,
            store,
            state,
            initialized: false,
            round: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.state.has_progress()
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Session start: a replay seed always starts that puzzle, otherwise a
    /// restored game is kept and only an empty state gets a new word
    pub fn start(&mut self, seed: Option<i64>) {
        if let Some(seed) = seed {
            self.initialize(None, Some(seed));
        } else if !self.state.is_initialized() {
            self.initialize(Some(self.state.word_length), None);
        }
    }

    /// Begin a new round
    ///
    /// With a seed the target is the catalog word under that key and its own
    /// length becomes the word length; an unknown key falls back to the
    /// built-in word for `length`. Without a seed a random word of `length` is
    /// drawn. Asking again for the current length without a seed is a no-op
    /// once this session has initialized.
    pub fn initialize(&mut self, length: Option<usize>, seed: Option<i64>) {
        if self.initialized && seed.is_none() && length == Some(self.state.word_length) {
            return;
        }

        let mut word_length = length.unwrap_or(self.state.word_length);
        let target = match seed {
            Some(key) => {
                let target = self.selector.seeded_target(key, word_length);
                if !target.is_fallback() {
                    word_length = target.word.len();
                }
                target
            }
            None => self.selector.random_target(word_length),
        };

        log::debug!(
            "New round: length {word_length}, key {}{}",
            target.key,
            if seed.is_some() { " (seeded)" } else { "" }
        );
        self.start_round(word_length, target);
        self.initialized = true;
    }

    /// Switch word length, resetting the round
    pub fn change_word_length(&mut self, new_length: usize, confirmed: bool) -> LengthChange {
        if !is_supported_length(new_length) {
            return LengthChange::Unsupported;
        }
        if new_length == self.state.word_length {
            return LengthChange::Unchanged;
        }
        if self.has_progress() && !confirmed {
            return LengthChange::NeedsConfirmation;
        }

        self.initialize(Some(new_length), None);
        LengthChange::Reset
    }

    /// Append a letter to the current guess
    ///
    /// Ignored after the game ends, when the guess is full, or for anything
    /// but an ASCII letter.
    pub fn press_letter(&mut self, letter: char) {
        if self.state.game_over
            || !letter.is_ascii_alphabetic()
            || self.state.current_guess.len() >= self.state.word_length
        {
            return;
        }

        let mut next = self.state.clone();
        next.current_guess.push(letter.to_ascii_lowercase());
        self.commit(next);
    }

    pub fn backspace(&mut self) {
        if self.state.game_over || self.state.current_guess.is_empty() {
            return;
        }

        let mut next = self.state.clone();
        next.current_guess.pop();
        self.commit(next);
    }

    /// First half of a submission: check the length and capture the guess
    ///
    /// # Errors
    ///
    /// Returns the outcome instead of a pending guess when there is nothing to
    /// validate: [`SubmitOutcome::Ignored`] after game over, or
    /// [`SubmitOutcome::WrongLength`] (with the message set) for a short guess.
    pub fn begin_submit(&mut self) -> Result<PendingGuess, SubmitOutcome> {
        if self.state.game_over {
            return Err(SubmitOutcome::Ignored);
        }

        if self.state.current_guess.len() != self.state.word_length {
            let mut next = self.state.clone();
            next.message = wrong_length_message(next.word_length);
            self.commit(next);
            return Err(SubmitOutcome::WrongLength);
        }

        Ok(PendingGuess {
            word: self.state.current_guess.clone(),
            round: self.round,
        })
    }

    /// Second half of a submission: apply the validity verdict
    ///
    /// A verdict that arrives after the game has ended is dropped, so a
    /// duplicate submission can never record a seventh guess. So is one for a
    /// guess typed before a restart or length change.
    pub fn finish_submit(&mut self, pending: PendingGuess, is_valid: bool) -> SubmitOutcome {
        if self.state.game_over {
            log::debug!("Dropping late verdict for {:?}", pending.word);
            return SubmitOutcome::Ignored;
        }
        if pending.round != self.round {
            log::debug!("Dropping verdict for {:?} from an earlier round", pending.word);
            return SubmitOutcome::Ignored;
        }

        let mut next = self.state.clone();
        if !is_valid {
            next.message = INVALID_WORD_MESSAGE.to_string();
            self.commit(next);
            return SubmitOutcome::Invalid;
        }

        let solved = pending.word == next.target_word;
        next.guesses.push(pending.word);
        next.current_guess.clear();

        let outcome = if solved {
            next.message = WIN_MESSAGE.to_string();
            next.game_over = true;
            SubmitOutcome::Won
        } else if next.guesses.len() >= MAX_GUESSES {
            next.message = loss_message(&next.target_word);
            next.game_over = true;
            SubmitOutcome::Lost
        } else {
            next.message.clear();
            SubmitOutcome::Accepted
        };

        self.commit(next);
        outcome
    }

    /// Submit the current guess, awaiting `validator`
    pub async fn submit<V: WordValidator>(&mut self, validator: &V) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let is_valid = validator.is_valid(pending.word()).await;
        self.finish_submit(pending, is_valid)
    }

    /// "Play again": a new random word of the current length, never re-seeded
    pub fn restart(&mut self) {
        let word_length = self.state.word_length;
        let target = self.selector.random_target(word_length);
        self.start_round(word_length, target);
    }

    /// Share text for the current game
    #[must_use]
    pub fn share_text(&self, base_url: &str) -> String {
        share::share_text(&self.state, base_url)
    }

    /// Hand the share text to `copy` (the clipboard) and report the result
    pub fn share<F>(&mut self, base_url: &str, copy: F) -> String
    where
        F: FnOnce(&str) -> bool,
    {
        let text = self.share_text(base_url);
        let mut next = self.state.clone();
        next.message = if copy(&text) {
            SHARE_COPIED_MESSAGE.to_string()
        } else {
            log::error!("Failed to copy share text");
            SHARE_FAILED_MESSAGE.to_string()
        };
        self.commit(next);
        text
    }

    fn start_round(&mut self, word_length: usize, target: Target) {
        self.round += 1;
        self.commit(GameState::fresh(word_length, target.word, target.key));
    }

    fn commit(&mut self, next: GameState) {
        if let Err(e) = self.store.save(&next) {
            log::error!("Error saving game state: {e}");
        }
        self.state = next;
    }
}

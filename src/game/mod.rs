//! The game engine
//!
//! Target selection, the persisted game state, the transition rules, and the
//! word-validity predicates the engine consults on submission.

mod engine;
mod selector;
mod state;
pub mod validity;

pub use engine::{
    GameEngine, INVALID_WORD_MESSAGE, LengthChange, PendingGuess, SHARE_COPIED_MESSAGE,
    SHARE_FAILED_MESSAGE, SubmitOutcome, WIN_MESSAGE, loss_message, wrong_length_message,
};
pub use selector::{Target, WordSelector, fallback_word};
pub use state::{GamePhase, GameState, MAX_GUESSES, NO_KEY};
pub use validity::WordValidator;

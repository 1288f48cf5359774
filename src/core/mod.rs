//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use word::{DEFAULT_WORD_LENGTH, WORD_LENGTHS, Word, WordError, is_supported_length};

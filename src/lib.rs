//! Infinite Wordle
//!
//! A word-guessing game engine: six attempts at a 5, 6 or 7-letter target
//! chosen at random or from a replay seed, with duplicate-aware feedback,
//! persisted state and shareable results.
//!
//! # Quick Start
//!
//! ```rust
//! use infinite_wordle::game::{GameEngine, WordSelector, validity::DictionaryValidator};
//! use infinite_wordle::storage::MemoryStore;
//! use infinite_wordle::wordlists::WordCatalog;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let catalog = WordCatalog::from_words(["apple", "grape"]);
//! let validator = DictionaryValidator::for_catalog(&catalog);
//! let mut engine = GameEngine::new(WordSelector::new(&catalog), MemoryStore::new());
//! engine.start(Some(0));
//!
//! for letter in "apple".chars() {
//!     engine.press_letter(letter);
//! }
//! engine.submit(&validator).await;
//! assert!(engine.state().is_won());
//! # });
//! ```

// Core domain types
pub mod core;

// Target catalog and word lists
pub mod wordlists;

// Game state machine
pub mod game;

// Saved game persistence
pub mod storage;

// Share text and replay links
pub mod share;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

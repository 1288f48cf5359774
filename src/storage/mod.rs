//! Game state persistence
//!
//! The whole [`GameState`] is stored as one JSON record under [`STATE_KEY`].
//! Loading never fails the game: a missing, unreadable or malformed record
//! just means there is no saved game.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::game::GameState;
use std::io;
use thiserror::Error;

/// Name of the persisted record
pub const STATE_KEY: &str = "wordleState";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored game state is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A place to keep the single game record
pub trait GameStore {
    /// Read the stored record, `Ok(None)` when nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<GameState>, StorageError>;

    /// Replace the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&mut self, state: &GameState) -> Result<(), StorageError>;

    /// Like [`GameStore::load`], with errors logged and treated as "no saved game"
    fn load_saved(&self) -> Option<GameState> {
        match self.load() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Ignoring saved game: {e}");
                None
            }
        }
    }
}

fn decode(raw: &str) -> Result<GameState, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

fn encode(state: &GameState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

use super::{GameStore, StorageError, decode, encode};
use crate::game::GameState;

/// In-process store holding the raw JSON record
///
/// Useful for tests and for sessions that should not touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-stored record, which need not be valid JSON
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            fail_writes: false,
        }
    }

    /// A store that rejects every write, like a full or disabled browser storage
    #[must_use]
    pub fn failing() -> Self {
        Self {
            raw: None,
            fail_writes: true,
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>, StorageError> {
        self.raw.as_deref().map(decode).transpose()
    }

    fn save(&mut self, state: &GameState) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.raw = Some(encode(state)?);
        Ok(())
    }
}

use super::{GameStore, STATE_KEY, StorageError, decode, encode};
use crate::game::GameState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stores the record as `<dir>/wordleState.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{STATE_KEY}.json"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl GameStore for FileStore {
    fn load(&self) -> Result<Option<GameState>, StorageError> {
        match fs::read_to_string(self.path()) {
            Ok(raw) => decode(&raw).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temporary sibling, then rename over the record
    fn save(&mut self, state: &GameState) -> Result<(), StorageError> {
        let raw = encode(state)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &path)?;
        log::trace!("Saved game state to {}", path.display());
        Ok(())
    }
}

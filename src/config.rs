//! Runtime configuration
//!
//! Built once from the command line (see `main.rs`) and passed down to the
//! front ends.

use crate::game::validity::{
    ConfiguredValidator, DictionaryValidator, HttpValidator, ValidityError,
};
use crate::share;
use crate::storage::FileStore;
use crate::wordlists::WordCatalog;
use std::io;
use std::path::PathBuf;

pub const DEFAULT_SHARE_URL: &str = "http://localhost:3000/";

/// File name the share text is dropped into, next to the saved game
pub const SHARE_FILE: &str = "wordleShare.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the saved game
    pub state_dir: PathBuf,
    /// Page the replay link points at
    pub share_url: String,
    /// Remote word check; the local dictionary is used when unset
    pub check_url: Option<String>,
    /// Catalog file replacing the embedded one
    pub words: Option<PathBuf>,
    /// Length for a fresh game
    pub word_length: Option<usize>,
    /// Replay link to start from
    pub replay: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("."),
            share_url: DEFAULT_SHARE_URL.to_string(),
            check_url: None,
            words: None,
            word_length: None,
            replay: None,
        }
    }
}

impl Config {
    /// The configured catalog file, or the embedded catalog
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a configured catalog file cannot be read.
    pub fn catalog(&self) -> io::Result<WordCatalog> {
        match &self.words {
            Some(path) => {
                let catalog = WordCatalog::from_file(path)?;
                log::info!("Loaded {} words from {}", catalog.len(), path.display());
                Ok(catalog)
            }
            None => Ok(WordCatalog::embedded()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client for `check_url` cannot be built.
    pub fn validator(&self, catalog: &WordCatalog) -> Result<ConfiguredValidator, ValidityError> {
        match &self.check_url {
            Some(url) => Ok(ConfiguredValidator::Http(HttpValidator::new(url.clone())?)),
            None => Ok(ConfiguredValidator::Dictionary(
                DictionaryValidator::for_catalog(catalog),
            )),
        }
    }

    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_dir)
    }

    #[must_use]
    pub fn share_path(&self) -> PathBuf {
        self.state_dir.join(SHARE_FILE)
    }

    /// Seed carried by the replay link, if any
    #[must_use]
    pub fn replay_seed(&self) -> Option<i64> {
        let link = share::decode(self.replay.as_deref()?)?;
        log::info!("Consumed replay link, now {}", link.url);
        link.seed
    }
}

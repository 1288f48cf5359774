//! Command implementations

pub mod check;
pub mod share;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use share::{copy_to_file, saved_share_text};
pub use simple::run_simple;

use crate::config::Config;
use crate::game::{GameEngine, LengthChange, WordSelector};
use crate::storage::GameStore;
use crate::wordlists::WordCatalog;

/// Restore the saved game and start the session
///
/// A replay link wins over everything. Otherwise a configured length replaces
/// the saved game only when that game has no progress.
pub fn open_game<'a, S: GameStore>(
    catalog: &'a WordCatalog,
    store: S,
    config: &Config,
) -> GameEngine<'a, S> {
    let mut engine = GameEngine::new(WordSelector::new(catalog), store);
    let seed = config.replay_seed();
    engine.start(seed);

    if seed.is_none()
        && let Some(length) = config.word_length
        && engine.change_word_length(length, false) == LengthChange::NeedsConfirmation
    {
        log::info!(
            "Keeping saved {}-letter game in progress",
            engine.state().word_length
        );
    }

    engine
}

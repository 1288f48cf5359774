//! Share command implementation

use crate::share::share_text;
use crate::storage::GameStore;
use std::fs;
use std::path::Path;

/// Share text for the game saved in `store`
///
/// # Errors
///
/// Returns an error if there is no saved game to share.
pub fn saved_share_text<S: GameStore>(store: &S, base_url: &str) -> Result<String, String> {
    let state = store
        .load_saved()
        .filter(|state| state.is_initialized())
        .ok_or("No saved game to share")?;

    if !state.game_over {
        log::info!("Sharing a game still in progress");
    }
    Ok(share_text(&state, base_url))
}

/// Share sink writing the text to `path`, standing in for a clipboard
pub fn copy_to_file(path: &Path) -> impl FnOnce(&str) -> bool + '_ {
    move |text| match fs::write(path, text) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to write {}: {e}", path.display());
            false
        }
    }
}

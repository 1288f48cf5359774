//! TUI application state and logic

use crate::commands::copy_to_file;
use crate::core::WORD_LENGTHS;
use crate::game::{GameEngine, LengthChange, WordValidator};
use crate::storage::GameStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

/// Application state
pub struct App<'a, S: GameStore, V: WordValidator> {
    pub engine: GameEngine<'a, S>,
    pub validator: V,
    pub share_url: String,
    pub share_path: PathBuf,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Waiting for y/n before switching to this length
    ConfirmLength(usize),
    /// Showing the share text
    Share(String),
}

/// The length after `current` in the 5 → 6 → 7 → 5 cycle
#[must_use]
pub fn next_length(current: usize) -> usize {
    WORD_LENGTHS
        .iter()
        .position(|&len| len == current)
        .map_or(WORD_LENGTHS[0], |i| WORD_LENGTHS[(i + 1) % WORD_LENGTHS.len()])
}

impl<'a, S: GameStore, V: WordValidator> App<'a, S, V> {
    #[must_use]
    pub fn new(
        engine: GameEngine<'a, S>,
        validator: V,
        share_url: impl Into<String>,
        share_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            engine,
            validator,
            share_url: share_url.into(),
            share_path: share_path.into(),
            input_mode: InputMode::Playing,
            should_quit: false,
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode.clone() {
            InputMode::ConfirmLength(length) => {
                if matches!(key.code, KeyCode::Char('y' | 'Y')) {
                    self.engine.change_word_length(length, true);
                }
                self.input_mode = InputMode::Playing;
            }
            InputMode::Share(_) => {
                self.input_mode = InputMode::Playing;
            }
            InputMode::Playing => self.handle_playing_key(key).await,
        }
    }

    async fn handle_playing_key(&mut self, key: KeyEvent) {
        let game_over = self.engine.is_game_over();
        // Ctrl/Alt chords never type
        let plain = key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT;

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.engine.restart();
            }
            KeyCode::Tab => self.cycle_length(),
            KeyCode::Enter => {
                self.engine.submit(&self.validator).await;
            }
            KeyCode::Backspace => self.engine.backspace(),
            KeyCode::Char(_) if !plain => {}
            KeyCode::Char('n') if game_over => self.engine.restart(),
            KeyCode::Char('s') if game_over => self.share(),
            KeyCode::Char('q') if game_over => self.should_quit = true,
            KeyCode::Char(c) => self.engine.press_letter(c),
            _ => {}
        }
    }

    fn cycle_length(&mut self) {
        let next = next_length(self.engine.state().word_length);
        if self.engine.change_word_length(next, false) == LengthChange::NeedsConfirmation {
            self.input_mode = InputMode::ConfirmLength(next);
        }
    }

    fn share(&mut self) {
        let text = self
            .engine
            .share(&self.share_url, copy_to_file(&self.share_path));
        self.input_mode = InputMode::Share(text);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<S: GameStore, V: WordValidator>(app: App<'_, S, V>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B, S, V>(terminal: &mut Terminal<B>, mut app: App<'_, S, V>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: GameStore,
    V: WordValidator,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key).await;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::validity::DictionaryValidator;
    use crate::game::{SHARE_COPIED_MESSAGE, WordSelector};
    use crate::storage::MemoryStore;
    use crate::wordlists::WordCatalog;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(
        catalog: &WordCatalog,
        share_path: PathBuf,
    ) -> App<'_, MemoryStore, DictionaryValidator> {
        let selector = WordSelector::with_rng_seed(catalog, 3);
        let mut engine = GameEngine::new(selector, MemoryStore::new());
        engine.start(Some(0));
        let validator = DictionaryValidator::for_catalog(catalog);
        App::new(engine, validator, "http://localhost:3000/", share_path)
    }

    fn catalog() -> WordCatalog {
        WordCatalog::from_entries([(0, "apple"), (1, "grape"), (2, "banana"), (3, "balance")])
    }

    async fn type_and_submit(app: &mut App<'_, MemoryStore, DictionaryValidator>, word: &str) {
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c))).await;
        }
        app.handle_key(press(KeyCode::Enter)).await;
    }

    #[test]
    fn length_cycle() {
        assert_eq!(next_length(5), 6);
        assert_eq!(next_length(6), 7);
        assert_eq!(next_length(7), 5);
        assert_eq!(next_length(9), 5);
    }

    #[tokio::test]
    async fn typing_and_submitting() {
        let catalog = catalog();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, dir.path().join("share.txt"));

        type_and_submit(&mut app, "grape").await;
        assert_eq!(app.engine.state().guesses, vec!["grape".to_string()]);

        app.handle_key(press(KeyCode::Char('a'))).await;
        app.handle_key(press(KeyCode::Backspace)).await;
        assert!(app.engine.state().current_guess.is_empty());
    }

    #[tokio::test]
    async fn tab_switches_length_or_asks() {
        let catalog = catalog();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, dir.path().join("share.txt"));

        app.handle_key(press(KeyCode::Tab)).await;
        assert_eq!(app.engine.state().word_length, 6);
        assert_eq!(app.input_mode, InputMode::Playing);

        app.handle_key(press(KeyCode::Char('b'))).await;
        app.handle_key(press(KeyCode::Tab)).await;
        assert_eq!(app.input_mode, InputMode::ConfirmLength(7));

        // anything but y cancels
        app.handle_key(press(KeyCode::Char('x'))).await;
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.engine.state().word_length, 6);

        app.handle_key(press(KeyCode::Tab)).await;
        app.handle_key(press(KeyCode::Char('y'))).await;
        assert_eq!(app.engine.state().word_length, 7);
        assert_eq!(app.engine.state().target_word, "balance");
    }

    #[tokio::test]
    async fn game_over_keys() {
        let catalog = catalog();
        let dir = tempfile::tempdir().unwrap();
        let share_path = dir.path().join("share.txt");
        let mut app = app(&catalog, share_path.clone());

        // before the game ends, n and s are letters
        app.handle_key(press(KeyCode::Char('s'))).await;
        assert_eq!(app.engine.state().current_guess, "s");
        app.handle_key(press(KeyCode::Backspace)).await;

        type_and_submit(&mut app, "apple").await;
        assert!(app.engine.is_game_over());

        app.handle_key(press(KeyCode::Char('s'))).await;
        let InputMode::Share(text) = &app.input_mode else {
            panic!("expected share panel");
        };
        assert!(text.ends_with("?s=0"));
        assert_eq!(std::fs::read_to_string(&share_path).unwrap(), *text);
        assert_eq!(app.engine.state().message, SHARE_COPIED_MESSAGE);

        app.handle_key(press(KeyCode::Esc)).await;
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(!app.should_quit);

        app.handle_key(press(KeyCode::Char('n'))).await;
        assert!(!app.engine.is_game_over());
        assert_eq!(app.engine.state().word_length, 5);
    }

    #[tokio::test]
    async fn modified_letters_do_not_type() {
        let catalog = catalog();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, dir.path().join("share.txt"));

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL))
            .await;
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT))
            .await;
        assert!(app.engine.state().current_guess.is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT))
            .await;
        assert_eq!(app.engine.state().current_guess, "a");

        // Ctrl-N still starts a new word
        let target = app.engine.state().target_word.clone();
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
            .await;
        assert!(app.engine.state().current_guess.is_empty());
        assert_eq!(app.engine.state().word_length, target.len());
    }

    #[tokio::test]
    async fn quitting() {
        let catalog = catalog();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, dir.path().join("share.txt"));
        app.handle_key(press(KeyCode::Esc)).await;
        assert!(app.should_quit);

        let mut app = self::app(&catalog, dir.path().join("share.txt"));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
        assert!(app.should_quit);
    }
}

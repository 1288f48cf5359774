//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a whole guess or a `:command`.

use super::share::copy_to_file;
use crate::game::{GameEngine, LengthChange, WordValidator, wrong_length_message};
use crate::output::{print_board, print_message, print_share};
use crate::storage::GameStore;
use std::io::{self, Write};
use std::path::Path;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Guess(String),
    New,
    /// `None` when the argument is missing or not a number
    Length(Option<usize>),
    Share,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    if let Some(command) = line.strip_prefix(':') {
        let mut parts = command.split_whitespace();
        return match parts.next().unwrap_or("") {
            "q" | "quit" | "exit" => Input::Quit,
            "n" | "new" => Input::New,
            "l" | "length" => Input::Length(parts.next().and_then(|n| n.parse().ok())),
            "s" | "share" => Input::Share,
            "h" | "help" => Input::Help,
            _ => Input::Unknown(line.to_string()),
        };
    }

    if line.chars().all(|c| c.is_ascii_alphabetic()) {
        Input::Guess(line.to_ascii_lowercase())
    } else {
        Input::Unknown(line.to_string())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub async fn run_simple<S, V>(
    engine: &mut GameEngine<'_, S>,
    validator: &V,
    share_url: &str,
    share_path: &Path,
) -> Result<(), String>
where
    S: GameStore,
    V: WordValidator,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Infinite Wordle - Simple Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_board(engine.state());
    print_message(engine.state());

    loop {
        let Some(line) = get_user_input("Guess")? else {
            println!();
            return Ok(());
        };

        match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Help => {
                print_help();
                continue;
            }
            Input::Unknown(text) => {
                println!("❌ Not a word or command: {text} (try :help)");
                continue;
            }
            Input::New => engine.restart(),
            Input::Length(None) => {
                println!("Usage: :length 5|6|7");
                continue;
            }
            Input::Length(Some(length)) => match engine.change_word_length(length, false) {
                LengthChange::Reset => {}
                LengthChange::Unchanged => {
                    println!("Already playing {length}-letter words");
                    continue;
                }
                LengthChange::Unsupported => {
                    println!("❌ Word length must be 5, 6 or 7");
                    continue;
                }
                LengthChange::NeedsConfirmation => {
                    let answer = get_user_input("Discard current game? (yes/no)")?;
                    if !matches!(answer.as_deref(), Some("yes" | "y")) {
                        continue;
                    }
                    engine.change_word_length(length, true);
                }
            },
            Input::Share => {
                if !engine.is_game_over() {
                    println!("Finish the game before sharing");
                    continue;
                }
                let text = engine.share(share_url, copy_to_file(share_path));
                print_share(&text);
            }
            Input::Guess(word) => {
                if engine.is_game_over() {
                    println!("The game is over: :new for another word, :share to share");
                    continue;
                }
                let word_length = engine.state().word_length;
                if word.len() > word_length {
                    println!("❌ {}", wrong_length_message(word_length));
                    continue;
                }

                while !engine.state().current_guess.is_empty() {
                    engine.backspace();
                }
                for letter in word.chars() {
                    engine.press_letter(letter);
                }
                engine.submit(validator).await;
            }
        }

        print_board(engine.state());
        print_message(engine.state());
        if engine.is_game_over() {
            println!("\n:new for another word, :share to share your result");
        }
    }
}

fn print_help() {
    println!("Type a guess and press Enter. Commands:");
    println!("  :new         new random word");
    println!("  :length N    switch to N-letter words (5, 6 or 7)");
    println!("  :share       share a finished game");
    println!("  :quit        exit\n");
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_guesses() {
        assert_eq!(parse_input("  Apple \n"), Input::Guess("apple".to_string()));
        assert_eq!(parse_input(""), Input::Empty);
        assert!(matches!(parse_input("app1e"), Input::Unknown(_)));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input(":quit"), Input::Quit);
        assert_eq!(parse_input(":new"), Input::New);
        assert_eq!(parse_input(":share"), Input::Share);
        assert_eq!(parse_input(":length 6"), Input::Length(Some(6)));
        assert_eq!(parse_input(":length six"), Input::Length(None));
        assert_eq!(parse_input(":length"), Input::Length(None));
        assert!(matches!(parse_input(":bogus"), Input::Unknown(_)));
    }
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyboardState, LetterStatus};
use colored::{ColoredString, Colorize};

/// A guessed letter as a colored tile
#[must_use]
pub fn status_tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A typed but not yet submitted letter
#[must_use]
pub fn pending_tile(letter: char) -> ColoredString {
    format!("[{}]", letter.to_ascii_uppercase()).bright_white().bold()
}

#[must_use]
pub fn empty_tile() -> ColoredString {
    "[ ]".bright_black()
}

/// A submitted guess with its feedback, tile by tile
#[must_use]
pub fn guess_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| status_tile(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The row being typed, padded with empty tiles
#[must_use]
pub fn input_row(current: &str, word_length: usize) -> String {
    let mut tiles: Vec<String> = current.chars().map(|c| pending_tile(c).to_string()).collect();
    tiles.resize_with(word_length.max(tiles.len()), || empty_tile().to_string());
    tiles.join(" ")
}

/// Keyboard rows with each used letter colored by its best status
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|letter| {
                    let key = letter.to_ascii_uppercase().to_string();
                    match keyboard.status(letter) {
                        Some(LetterStatus::Correct) => key.black().on_green().to_string(),
                        Some(LetterStatus::Present) => key.black().on_yellow().to_string(),
                        Some(LetterStatus::Absent) => key.bright_black().to_string(),
                        None => key.white().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

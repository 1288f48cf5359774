//! Display functions for the line-based front ends

use super::formatters::{guess_row, input_row, keyboard_rows};
use crate::commands::CheckResult;
use crate::game::{GameState, MAX_GUESSES};
use colored::Colorize;

/// Print the grid: submitted guesses, the row being typed, then blank rows
pub fn print_board(state: &GameState) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{}  {}",
        "INFINITE WORDLE".bright_cyan().bold(),
        format!("{} letters", state.word_length).bright_yellow()
    );
    println!("{}", "─".repeat(40).cyan());

    for (guess, feedback) in state.guesses.iter().zip(state.feedback()) {
        println!("  {}", guess_row(guess, &feedback));
    }

    let mut rows = state.guesses.len();
    if !state.game_over && rows < MAX_GUESSES {
        println!("  {}", input_row(&state.current_guess, state.word_length));
        rows += 1;
    }
    for _ in rows..MAX_GUESSES {
        println!("  {}", input_row("", state.word_length));
    }

    println!();
    for row in keyboard_rows(&state.keyboard()) {
        println!("    {row}");
    }
}

/// Print the transient status line, if any
pub fn print_message(state: &GameState) {
    if state.message.is_empty() {
        return;
    }
    let message = if state.is_won() {
        state.message.green().bold()
    } else if state.game_over {
        state.message.red().bold()
    } else {
        state.message.yellow()
    };
    println!("\n{message}");
}

pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} → {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("  {}", guess_row(&result.guess, &result.feedback));
    println!("  {}", result.feedback.to_emoji());
    for (letter, status) in result.guess.chars().zip(result.feedback.statuses()) {
        println!("    {}: {status}", letter.to_ascii_uppercase());
    }
}

pub fn print_share(text: &str) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!("{text}");
    println!("{}", "═".repeat(40).bright_cyan());
}

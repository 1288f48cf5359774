//! Check command implementation

use crate::core::{Feedback, Word, WordError};

/// Result of evaluating one guess against one target
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::with_length(guess, target.len())?;
    let feedback = Feedback::evaluate(guess.text(), target.text());

    Ok(CheckResult {
        guess: guess.into_string(),
        target: target.into_string(),
        feedback,
    })
}

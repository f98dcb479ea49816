//! Formatting utilities for terminal output

use crate::core::{GuessRecord, LetterOutcome};
use colored::Colorize;

/// Render a guess with per-letter colours
///
/// Correct letters are green uppercase, misplaced letters yellow lowercase and
/// absent letters dimmed.
#[must_use]
pub fn colored_guess(record: &GuessRecord) -> String {
    record
        .guess()
        .chars()
        .iter()
        .zip(record.signature().outcomes())
        .map(|(&letter, outcome)| {
            let letter = char::from(letter).to_string();
            match outcome {
                LetterOutcome::Correct => letter.to_uppercase().bright_green().bold().to_string(),
                LetterOutcome::Present => letter.yellow().to_string(),
                LetterOutcome::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

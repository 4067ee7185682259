//! Formatting utilities for terminal output

use crate::game::{Counters, GameConfig, GuessResult};

/// Title and body text describing a guess outcome
///
/// `character` is the guessed character; `word` is the round's word, revealed on game over.
#[must_use]
pub fn result_message(result: GuessResult, character: char, word: &str) -> (&'static str, String) {
    let shown = character.to_uppercase();
    match result {
        GuessResult::Accepted => ("Correct", format!("\"{shown}\" is in the word")),
        GuessResult::AlreadyOpened => (
            "Wrong",
            format!("The character \"{shown}\" was opened before"),
        ),
        GuessResult::NotInWord => (
            "Wrong",
            format!("The word doesn't contain the character: \"{shown}\""),
        ),
        GuessResult::RoundComplete => ("Success", "Keep going!".to_string()),
        GuessResult::GameOver => (
            "Game over",
            format!("You are dead. The word was \"{}\"", word.to_uppercase()),
        ),
    }
}

/// One-line summary of the session counters
#[must_use]
pub fn counters_line(counters: Counters, config: &GameConfig) -> String {
    let mut parts = vec![format!("Round {}", counters.round)];
    if config.scoring {
        parts.push(format!("Score {}", counters.score));
    }
    match config.failure_threshold {
        Some(limit) => parts.push(format!("Wrong tries {}/{limit}", counters.wrong_tries)),
        None => parts.push(format!("Wrong tries {}", counters.wrong_tries)),
    }
    parts.join(" | ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing wrong tries used against the failure threshold
#[must_use]
pub fn tries_bar(wrong_tries: u32, threshold: u32, width: usize) -> String {
    create_progress_bar(f64::from(wrong_tries), f64::from(threshold), width)
}

//! Guess input validation
//!
//! Raw user input is turned into a single lowercase character before it reaches the game.

use thiserror::Error;

/// Why a raw guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Type one letter")]
    Empty,
    #[error("Type only one letter, got {0} characters")]
    TooManyCharacters(usize),
}

/// Parse raw input into a single guess character
///
/// The input must hold exactly one character. The result is lowercased.
///
/// # Errors
/// Returns `InputError::Empty` for empty input and
/// `InputError::TooManyCharacters` for anything longer than one character.
///
/// # Examples
/// ```
/// use hangman::core::{parse_guess, InputError};
///
/// assert_eq!(parse_guess("A"), Ok('a'));
/// assert_eq!(parse_guess(""), Err(InputError::Empty));
/// assert_eq!(parse_guess("ab"), Err(InputError::TooManyCharacters(2)));
/// ```
pub fn parse_guess(input: &str) -> Result<char, InputError> {
    let mut chars = input.chars();

    let Some(first) = chars.next() else {
        return Err(InputError::Empty);
    };

    let rest = chars.count();
    if rest > 0 {
        return Err(InputError::TooManyCharacters(rest + 1));
    }

    Ok(first.to_lowercase().next().unwrap_or(first))
}

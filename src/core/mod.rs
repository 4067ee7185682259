//! Core domain types for Hangman
//!
//! Words, guess input validation and the display mask. Everything here is pure
//! and independent of game rules.

mod guess;
mod mask;
mod word;

pub use guess::{InputError, parse_guess};
pub use mask::{DisplayMask, PLACEHOLDER};
pub use word::{Word, WordError};

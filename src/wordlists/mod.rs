//! Word lists for Hangman
//!
//! Provides the embedded noun list compiled into the binary, plus loaders for
//! user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{NOUNS, NOUNS_COUNT};
pub use loader::{WordListError, WordSource, load, load_in_background};

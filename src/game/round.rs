//! Round state
//!
//! Tracks the word being guessed and which of its characters have been opened.

use crate::core::{DisplayMask, Word};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Why a character could not be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpenError {
    #[error("The character \"{}\" was opened before", .0.to_uppercase())]
    AlreadyOpened(char),
    #[error("The word doesn't contain the character \"{}\"", .0.to_uppercase())]
    NotInWord(char),
}

/// The word of the current round and its opened characters
#[derive(Debug, Clone)]
pub struct RoundState {
    word: Word,
    opened: FxHashSet<char>,
}

impl RoundState {
    /// Start a round on `word` with nothing opened
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            opened: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn opened(&self) -> &FxHashSet<char> {
        &self.opened
    }

    #[inline]
    #[must_use]
    pub fn is_opened(&self, character: char) -> bool {
        self.opened.contains(&character)
    }

    /// Reveal `character`
    ///
    /// The opened set is left untouched on error.
    ///
    /// # Errors
    /// - `OpenError::AlreadyOpened` if the character was revealed earlier this round
    /// - `OpenError::NotInWord` if the word does not contain it
    pub fn open(&mut self, character: char) -> Result<(), OpenError> {
        if self.opened.contains(&character) {
            return Err(OpenError::AlreadyOpened(character));
        }
        if !self.word.has_letter(character) {
            return Err(OpenError::NotInWord(character));
        }
        self.opened.insert(character);
        Ok(())
    }

    /// Current display mask
    #[must_use]
    pub fn render_mask(&self) -> DisplayMask {
        DisplayMask::new(&self.word, &self.opened)
    }

    /// True iff every character of the word has been opened
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.word.letters().is_subset(&self.opened)
    }
}

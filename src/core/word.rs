//! Hangman word representation
//!
//! A Word stores a lowercase ASCII word along with the set of distinct letters it contains.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A lowercase word to be guessed, with distinct-letter tracking
///
/// Immutable once constructed; a round holds exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Castle").unwrap();
    /// assert_eq!(word.text(), "castle");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of character positions in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        // ASCII only, so bytes == chars
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the characters of the word in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// Number of distinct letters, i.e. accepted guesses needed to complete it
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("castle").unwrap();
        assert_eq!(word.text(), "castle");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CASTLE").unwrap();
        assert_eq!(word.text(), "castle");

        let word2 = Word::new("CaStLe").unwrap();
        assert_eq!(word2.text(), "castle");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cat3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ice cream"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("t-shirt"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new(" cat"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("cat").unwrap();
        assert!(word.has_letter('c'));
        assert!(word.has_letter('a'));
        assert!(word.has_letter('t'));
        assert!(!word.has_letter('x'));
        assert!(!word.has_letter('C'));
    }

    #[test]
    fn word_distinct_letters_with_duplicates() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.len(), 6);
        assert_eq!(word.distinct_letters(), 3);
        assert!(word.letters().contains(&'n'));
    }

    #[test]
    fn word_chars_in_order() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.chars().collect::<Vec<_>>(), vec!['d', 'o', 'g']);
    }

    #[test]
    fn word_display() {
        let word = Word::new("zebra").unwrap();
        assert_eq!(format!("{word}"), "zebra");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("tiger").unwrap();
        let word2 = Word::new("TIGER").unwrap();
        let word3 = Word::new("eagle").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}

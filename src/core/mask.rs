//! Display mask for a partially revealed word
//!
//! The mask is derived from a word and the set of opened characters; it is never stored.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Marker shown for positions whose character has not been opened
pub const PLACEHOLDER: char = '?';

/// Per-position view of a word: `Some(letter)` if revealed, `None` otherwise
///
/// Always has exactly one cell per character of the word it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMask {
    cells: Vec<Option<char>>,
}

impl DisplayMask {
    /// Build the mask for `word` given the opened characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{DisplayMask, Word};
    /// use rustc_hash::FxHashSet;
    ///
    /// let word = Word::new("cat").unwrap();
    /// let opened: FxHashSet<char> = ['a'].into_iter().collect();
    /// assert_eq!(DisplayMask::new(&word, &opened).to_string(), "?A?");
    /// ```
    #[must_use]
    pub fn new(word: &Word, opened: &FxHashSet<char>) -> Self {
        let cells = word
            .chars()
            .map(|c| opened.contains(&c).then_some(c))
            .collect();
        Self { cells }
    }

    /// Number of positions (equals the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True once no placeholder remains
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Render with a custom placeholder and a separator between positions
    ///
    /// Revealed letters are uppercased.
    #[must_use]
    pub fn render_with(&self, placeholder: char, separator: &str) -> String {
        let mut out = String::with_capacity(self.cells.len() * (1 + separator.len()));
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push(cell.map_or(placeholder, |c| c.to_ascii_uppercase()));
        }
        out
    }
}

impl fmt::Display for DisplayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(PLACEHOLDER, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(chars: &[char]) -> FxHashSet<char> {
        chars.iter().copied().collect()
    }

    #[test]
    fn mask_nothing_opened() {
        let word = Word::new("dog").unwrap();
        let mask = DisplayMask::new(&word, &opened(&[]));
        assert_eq!(mask.to_string(), "???");
        assert_eq!(mask.hidden(), 3);
        assert!(!mask.is_revealed());
    }

    #[test]
    fn mask_partial() {
        let word = Word::new("cat").unwrap();
        assert_eq!(DisplayMask::new(&word, &opened(&['a'])).to_string(), "?A?");
        assert_eq!(
            DisplayMask::new(&word, &opened(&['a', 't'])).to_string(),
            "?AT"
        );
    }

    #[test]
    fn mask_reveals_every_duplicate_position() {
        let word = Word::new("banana").unwrap();
        let mask = DisplayMask::new(&word, &opened(&['a']));
        assert_eq!(mask.to_string(), "?A?A?A");
        assert_eq!(mask.hidden(), 3);
    }

    #[test]
    fn mask_fully_revealed() {
        let word = Word::new("cat").unwrap();
        let mask = DisplayMask::new(&word, &opened(&['c', 'a', 't']));
        assert_eq!(mask.to_string(), "CAT");
        assert!(mask.is_revealed());
        assert_eq!(mask.hidden(), 0);
    }

    #[test]
    fn mask_length_matches_word_for_every_subset() {
        let word = Word::new("elephant").unwrap();
        let letters: Vec<char> = word.chars().collect();

        for n in 0..=letters.len() {
            let mask = DisplayMask::new(&word, &opened(&letters[..n]));
            assert_eq!(mask.len(), word.len());
            assert_eq!(mask.to_string().chars().count(), word.len());
        }
    }

    #[test]
    fn mask_ignores_characters_not_in_word() {
        let word = Word::new("owl").unwrap();
        let mask = DisplayMask::new(&word, &opened(&['x', 'z']));
        assert_eq!(mask.to_string(), "???");
    }

    #[test]
    fn mask_render_with_separator() {
        let word = Word::new("cat").unwrap();
        let mask = DisplayMask::new(&word, &opened(&['c']));
        assert_eq!(mask.render_with('_', " "), "C _ _");
    }
}

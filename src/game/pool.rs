//! Word pool
//!
//! Keeps the original word list and the words still available for new rounds.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// The words a session draws rounds from
#[derive(Debug, Clone)]
pub struct WordPool {
    original: Vec<Word>,
    remaining: Vec<Word>,
}

impl WordPool {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            remaining: words.clone(),
            original: words,
        }
    }

    /// Pick a remaining word uniformly at random
    ///
    /// Returns `None` if no words remain.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.remaining.choose(rng)
    }

    /// Remove every copy of `word` so it cannot be drawn again
    ///
    /// Returns how many entries were removed.
    pub fn remove(&mut self, word: &Word) -> usize {
        let before = self.remaining.len();
        self.remaining.retain(|w| w != word);
        before - self.remaining.len()
    }

    /// Put every original word back
    pub fn restore(&mut self) {
        self.remaining.clone_from(&self.original);
    }

    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.remaining
    }

    #[must_use]
    pub fn original(&self) -> &[Word] {
        &self.original
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }
}

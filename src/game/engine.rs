//! Guess evaluation and session state machine
//!
//! `Game` owns the word pool, the current round and the counters. Front ends call
//! `start_round`, `submit`/`guess` and `reset`, then render from the accessors.

use super::config::{GameConfig, WrongTryPolicy};
use super::pool::WordPool;
use super::round::{OpenError, RoundState};
use crate::core::{DisplayMask, InputError, Word, parse_guess};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use thiserror::Error;

/// Outcome of a single submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The character is in the word and was opened
    Accepted,
    /// The character had been opened earlier this round
    AlreadyOpened,
    /// The word doesn't contain the character
    NotInWord,
    /// The guess opened the last hidden character
    RoundComplete,
    /// Wrong tries reached the failure threshold
    GameOver,
}

impl GuessResult {
    /// True for outcomes that reject the guess
    #[must_use]
    pub const fn is_wrong(self) -> bool {
        matches!(self, Self::AlreadyOpened | Self::NotInWord)
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been started since creation or reset
    Idle,
    AwaitingGuess,
    RoundComplete,
    /// Terminal until `reset`
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingGuess => "awaiting guess",
            Self::RoundComplete => "round complete",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Session counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub score: i64,
    pub round: u32,
    pub wrong_tries: u32,
}

/// Errors from driving the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no words left to start a round")]
    EmptyWordPool,
    #[error("invalid guess: {0}")]
    InvalidGuessInput(#[from] InputError),
    #[error("no round in progress")]
    NoActiveRound,
    #[error("game over, reset to play again")]
    GameOver,
}

/// A hangman session
pub struct Game {
    config: GameConfig,
    pool: WordPool,
    round: Option<RoundState>,
    counters: Counters,
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// Create a session over `words` with an OS-seeded random source
    ///
    /// # Examples
    /// ```
    /// use hangman::game::{Game, GameConfig, GuessResult};
    /// use hangman::wordlists::loader::words_from_slice;
    ///
    /// let mut game = Game::new(words_from_slice(&["cat"]), GameConfig::default());
    /// game.start_round().unwrap();
    ///
    /// assert_eq!(game.submit('a').unwrap(), GuessResult::Accepted);
    /// assert_eq!(game.render_mask().unwrap().to_string(), "?A?");
    /// ```
    #[must_use]
    pub fn new(words: Vec<Word>, config: GameConfig) -> Self {
        Self::with_rng(words, config, StdRng::from_os_rng())
    }

    /// Create a session with a deterministic random source
    #[must_use]
    pub fn with_seed(words: Vec<Word>, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(words, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            pool: WordPool::new(words),
            round: None,
            counters: Counters::default(),
            state: GameState::Idle,
            rng,
        }
    }

    /// Draw a new word and begin a round
    ///
    /// Clears opened characters and increments the round counter. Wrong tries
    /// carry over between rounds.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the session has ended; nothing changes
    /// - `GameError::EmptyWordPool` if no words remain; nothing changes
    pub fn start_round(&mut self) -> Result<&Word, GameError> {
        if self.state == GameState::GameOver {
            return Err(GameError::GameOver);
        }

        let Some(word) = self.pool.choose(&mut self.rng).cloned() else {
            log::warn!(
                "cannot start round {}: word pool is empty",
                self.counters.round + 1
            );
            return Err(GameError::EmptyWordPool);
        };

        self.counters.round += 1;
        self.state = GameState::AwaitingGuess;
        log::info!(
            "round {} started: {} letters ({} distinct), {} words left",
            self.counters.round,
            word.len(),
            word.distinct_letters(),
            self.pool.len()
        );

        let round = self.round.insert(RoundState::new(word));
        Ok(round.word())
    }

    /// Validate raw input and submit it as a guess
    ///
    /// # Errors
    /// `GameError::InvalidGuessInput` for empty or multi-character input, plus
    /// every error of [`Game::submit`].
    pub fn guess(&mut self, input: &str) -> Result<GuessResult, GameError> {
        let character = parse_guess(input).inspect_err(|e| {
            log::debug!("rejected guess input {input:?}: {e}");
        })?;
        self.submit(character)
    }

    /// Apply a single-character guess to the current round
    ///
    /// # Errors
    /// - `GameError::GameOver` after the failure threshold was reached
    /// - `GameError::NoActiveRound` before the first round or after a completed one
    pub fn submit(&mut self, character: char) -> Result<GuessResult, GameError> {
        match self.state {
            GameState::AwaitingGuess => {}
            GameState::GameOver => {
                log::debug!("guess {character:?} ignored: game over");
                return Err(GameError::GameOver);
            }
            GameState::Idle | GameState::RoundComplete => {
                log::debug!("guess {character:?} ignored: {}", self.state);
                return Err(GameError::NoActiveRound);
            }
        }
        let valid = match &self.round {
            Some(round) => !round.is_opened(character) && round.word().has_letter(character),
            None => return Err(GameError::NoActiveRound),
        };

        let every_guess = self.config.wrong_try_policy == WrongTryPolicy::EveryGuess;
        if every_guess {
            self.counters.wrong_tries += 1;
        }

        // A correct guess that uses up the last try under EveryGuess still ends the game
        if valid && self.threshold_reached() {
            return Ok(self.finish_game(character));
        }

        let Some(round) = self.round.as_mut() else {
            return Err(GameError::NoActiveRound);
        };
        let opened = round.open(character).map(|()| round.is_complete());

        let result = match opened {
            Ok(complete) => {
                self.adjust_score(1);
                if complete {
                    GuessResult::RoundComplete
                } else {
                    GuessResult::Accepted
                }
            }
            Err(err) => {
                log::debug!("guess {character:?}: {err}");
                self.adjust_score(-1);
                if !every_guess {
                    self.counters.wrong_tries += 1;
                }
                if self.threshold_reached() {
                    return Ok(self.finish_game(character));
                }
                match err {
                    OpenError::AlreadyOpened(_) => GuessResult::AlreadyOpened,
                    OpenError::NotInWord(_) => GuessResult::NotInWord,
                }
            }
        };

        if result == GuessResult::RoundComplete {
            self.complete_round();
        }

        Ok(result)
    }

    /// Zero every counter, restore the word pool and return to `Idle`
    pub fn reset(&mut self) {
        log::info!(
            "session reset after {} rounds (score {})",
            self.counters.round,
            self.counters.score
        );
        self.counters = Counters::default();
        self.round = None;
        self.pool.restore();
        self.state = GameState::Idle;
    }

    /// Display mask of the current round, if any
    #[must_use]
    pub fn render_mask(&self) -> Option<DisplayMask> {
        self.round.as_ref().map(RoundState::render_mask)
    }

    /// True iff the current round's word is fully revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.as_ref().is_some_and(RoundState::is_complete)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn counters(&self) -> Counters {
        self.counters
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// The word of the current round
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.round.as_ref().map(RoundState::word)
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Wrong tries left before the game ends, if a threshold is configured
    #[must_use]
    pub fn tries_left(&self) -> Option<u32> {
        self.config
            .failure_threshold
            .map(|limit| limit.saturating_sub(self.counters.wrong_tries))
    }

    fn threshold_reached(&self) -> bool {
        self.config
            .failure_threshold
            .is_some_and(|limit| self.counters.wrong_tries >= limit)
    }

    fn adjust_score(&mut self, delta: i64) {
        if self.config.scoring {
            self.counters.score += delta;
        }
    }

    fn finish_game(&mut self, character: char) -> GuessResult {
        self.state = GameState::GameOver;
        log::info!(
            "game over on guess {character:?} after {} wrong tries (round {}, score {})",
            self.counters.wrong_tries,
            self.counters.round,
            self.counters.score
        );
        GuessResult::GameOver
    }

    fn complete_round(&mut self) {
        self.state = GameState::RoundComplete;
        if let Some(round) = &self.round {
            let removed = self.pool.remove(round.word());
            log::info!(
                "round {} complete: {:?} solved, {} removed, {} words left",
                self.counters.round,
                round.word().text(),
                removed,
                self.pool.len()
            );
        }
    }
}

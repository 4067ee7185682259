//! Hangman rules
//!
//! The round/guess state machine, the word pool it draws from, and the rule
//! configuration selecting scoring and failure-threshold behavior.

pub mod config;
mod engine;
pub mod pool;
pub mod round;

pub use config::{ConfigError, DEFAULT_FAILURE_THRESHOLD, GameConfig, WrongTryPolicy};
pub use engine::{Counters, Game, GameError, GameState, GuessResult};
pub use pool::WordPool;
pub use round::{OpenError, RoundState};

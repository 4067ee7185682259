//! Hangman
//!
//! A word-guessing game: a word is drawn from a noun list and the player opens it
//! one character at a time, tracking score, rounds and wrong tries until a failure
//! threshold ends the session.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{Game, GameConfig, GuessResult};
//! use hangman::wordlists::loader::words_from_slice;
//!
//! let mut game = Game::new(words_from_slice(&["cat"]), GameConfig::default());
//! game.start_round().unwrap();
//!
//! assert_eq!(game.guess("a").unwrap(), GuessResult::Accepted);
//! assert_eq!(game.guess("t").unwrap(), GuessResult::Accepted);
//! assert_eq!(game.guess("c").unwrap(), GuessResult::RoundComplete);
//! assert_eq!(game.counters().score, 3);
//! ```

// Core domain types
pub mod core;

// Game rules and state machine
pub mod game;

// Word lists
pub mod wordlists;

// Application configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

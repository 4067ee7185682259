//! Simulation command
//!
//! Automated players run whole sessions against the game rules, in parallel.

use crate::core::Word;
use crate::game::{Game, GameConfig, GameError, GameState, GuessResult};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Letters ordered by frequency in English text
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// How an automated player orders its guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Untried letters in a fresh random order each round
    Random,
    /// Untried letters from most to least common in English
    Frequency,
}

impl Player {
    /// Create player from name string
    ///
    /// Supported names: "random", "frequency". Defaults to random if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency,
            _ => Self::Random,
        }
    }

    fn guess_order(self, rng: &mut StdRng) -> Vec<char> {
        let mut letters: Vec<char> = FREQUENCY_ORDER.chars().collect();
        if self == Self::Random {
            letters.shuffle(rng);
        }
        letters
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Frequency => f.write_str("frequency"),
        }
    }
}

/// Outcome of one automated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub rounds_completed: u32,
    pub score: i64,
    pub game_over: bool,
    pub guesses: u32,
}

/// Aggregate of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub player: Player,
    pub sessions: usize,
    pub total_rounds_completed: u64,
    pub average_rounds_completed: f64,
    pub average_score: f64,
    pub best_score: i64,
    pub worst_score: i64,
    pub game_overs: usize,
    pub rounds_distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn game_over_rate(&self) -> f64 {
        if self.sessions == 0 {
            0.0
        } else {
            self.game_overs as f64 / self.sessions as f64
        }
    }
}

/// Play one session until game over or until the word pool runs out
#[must_use]
pub fn play_session(
    words: &[Word],
    config: GameConfig,
    player: Player,
    seed: u64,
) -> SessionResult {
    let mut game = Game::with_seed(words.to_vec(), config, seed);
    let mut rng = StdRng::seed_from_u64(seed.rotate_left(32));
    let mut rounds_completed = 0;
    let mut guesses = 0;

    'session: loop {
        match game.start_round() {
            Ok(_) => {}
            Err(GameError::EmptyWordPool | GameError::GameOver) => break,
            Err(e) => {
                log::error!("simulation could not start a round: {e}");
                break;
            }
        }

        for letter in player.guess_order(&mut rng) {
            guesses += 1;
            match game.submit(letter) {
                Ok(GuessResult::RoundComplete) => {
                    rounds_completed += 1;
                    continue 'session;
                }
                Ok(GuessResult::GameOver) => break 'session,
                Ok(_) => {}
                Err(e) => {
                    log::error!("simulation guess rejected: {e}");
                    break 'session;
                }
            }
        }

        // Every letter tried without completing: the word holds non-letters
        log::warn!("simulation exhausted the alphabet on round {}", game.counters().round);
        break;
    }

    SessionResult {
        rounds_completed,
        score: game.counters().score,
        game_over: game.state() == GameState::GameOver,
        guesses,
    }
}

/// Run `sessions` independent sessions in parallel
///
/// Session `i` is seeded with `seed + i`, so a run is reproducible for a given seed.
#[must_use]
pub fn run_simulation(
    words: &[Word],
    config: GameConfig,
    player: Player,
    sessions: usize,
    seed: u64,
) -> SimulationResult {
    let start = Instant::now();

    let pb = ProgressBar::new(sessions as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{player} player"));

    let results: Vec<SessionResult> = (0..sessions as u64)
        .into_par_iter()
        .map(|i| {
            let result = play_session(words, config, player, seed.wrapping_add(i));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    summarize(player, &results, start.elapsed())
}

fn summarize(player: Player, results: &[SessionResult], duration: Duration) -> SimulationResult {
    let sessions = results.len();
    let total_rounds_completed: u64 = results.iter().map(|r| u64::from(r.rounds_completed)).sum();
    let total_score: i64 = results.iter().map(|r| r.score).sum();

    let mut rounds_distribution = BTreeMap::new();
    for result in results {
        *rounds_distribution.entry(result.rounds_completed).or_insert(0) += 1;
    }

    let (average_rounds_completed, average_score) = if sessions == 0 {
        (0.0, 0.0)
    } else {
        (
            total_rounds_completed as f64 / sessions as f64,
            total_score as f64 / sessions as f64,
        )
    };

    SimulationResult {
        player,
        sessions,
        total_rounds_completed,
        average_rounds_completed,
        average_score,
        best_score: results.iter().map(|r| r.score).max().unwrap_or(0),
        worst_score: results.iter().map(|r| r.score).min().unwrap_or(0),
        game_overs: results.iter().filter(|r| r.game_over).count(),
        rounds_distribution,
        duration,
    }
}

//! Hangman - CLI
//!
//! Word-guessing game with TUI and line-based modes, plus a simulation of automated players.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{Player, run_simple, run_simulation},
    config::AppConfig,
    game::{Game, GameConfig, WrongTryPolicy},
    interactive::{App, run_tui},
    output::print_simulation_result,
    wordlists::{WordSource, load, load_in_background},
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden noun one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: path to a JSON ({"nouns": [...]}) or one-word-per-line file (default: bundled nouns)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Wrong tries allowed before the game ends
    #[arg(short, long, global = true, conflicts_with = "no_threshold")]
    threshold: Option<u32>,

    /// Never end the game on wrong tries
    #[arg(long, global = true)]
    no_threshold: bool,

    /// Disable scoring
    #[arg(long, global = true)]
    no_score: bool,

    /// Count every guess as a wrong try, correct ones included
    #[arg(long, global = true)]
    every_guess_counts: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Run automated players and report statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Player: random (default) or frequency
        #[arg(short, long, default_value = "random")]
        player: String,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination path
        #[arg(default_value = "hangman.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&config, cli.verbose, matches!(command, Commands::Play))?;

    let game_config = game_config(&cli, &config)?;
    let source = WordSource::from_path(cli.words.clone().or_else(|| config.words.path.clone()));
    log::debug!("rules: {game_config:?}, words: {source:?}");

    match command {
        Commands::Play => run_play_command(game_config, source),
        Commands::Simple => run_simple_command(game_config, &source),
        Commands::Simulate {
            count,
            player,
            seed,
        } => {
            run_simulate_command(game_config, &source, count, &player, seed);
            Ok(())
        }
        Commands::InitConfig { path } => run_init_config_command(&path),
    }
}

/// Merge command-line flags over the config file's rules
fn game_config(cli: &Cli, config: &AppConfig) -> Result<GameConfig> {
    let mut rules = config.game;

    if cli.no_threshold {
        rules.failure_threshold = None;
    } else if let Some(threshold) = cli.threshold {
        rules.failure_threshold = Some(threshold);
    }
    if cli.no_score {
        rules.scoring = false;
    }
    if cli.every_guess_counts {
        rules.wrong_try_policy = WrongTryPolicy::EveryGuess;
    }

    rules.validate()?;
    Ok(rules)
}

fn init_logging(config: &AppConfig, verbosity: u8, tui: bool) -> Result<()> {
    let env_filters = std::env::var("RUST_LOG").ok();
    log_builder(config, verbosity, tui, env_filters.as_deref())?.init();
    Ok(())
}

/// Logger setup; `env_filters` uses `RUST_LOG` syntax
fn log_builder(
    config: &AppConfig,
    verbosity: u8,
    tui: bool,
    env_filters: Option<&str>,
) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();

    // CLI verbosity overrides config
    let level = match verbosity {
        0 => config.log_level().unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    if let Some(file) = &config.logging.file {
        if let Some(filters) = env_filters {
            builder.parse_filters(filters);
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .with_context(|| format!("Failed to open log file {}", file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}: {}",
                fmt.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else if tui {
        // stderr would draw over the alternate screen, whatever RUST_LOG says
        builder.filter_level(log::LevelFilter::Off);
    } else if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }

    Ok(builder)
}

fn run_play_command(config: GameConfig, source: WordSource) -> Result<()> {
    let app = App::new(config, load_in_background(source));
    run_tui(app)
}

fn run_simple_command(config: GameConfig, source: &WordSource) -> Result<()> {
    let mut game = Game::new(load(source), config);
    run_simple(&mut game).context("Failed to read input")
}

fn run_simulate_command(
    config: GameConfig,
    source: &WordSource,
    count: usize,
    player_name: &str,
    seed: Option<u64>,
) {
    let words = load(source);
    let player = Player::from_name(player_name);
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "Simulating {count} sessions with the {player} player on {} words (seed {seed})...",
        words.len()
    );

    let result = run_simulation(&words, config, player, count, seed);
    print_simulation_result(&result);
}

fn run_init_config_command(path: &Path) -> Result<()> {
    AppConfig::create_default(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

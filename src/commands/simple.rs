//! Simple interactive CLI mode
//!
//! Text-based hangman without TUI

use crate::core::parse_guess;
use crate::game::{Game, GameState, GuessResult};
use crate::output::{print_guess_result, print_round_status};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    Reset,
    Help,
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input {
            "/quit" | "/q" | "/exit" => Self::Quit,
            "/reset" | "/r" => Self::Reset,
            "/help" | "/h" | "/?" => Self::Help,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut Game) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(game, &mut stdin.lock())
}

/// Run the line-based game loop reading from `input`
///
/// Ends on `/quit` or end of input.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple_with<R: BufRead>(game: &mut Game, input: &mut R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Hangman - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    if !start_round(game) {
        println!("\nNo words available. Check the word list and try again.\n");
        return Ok(());
    }

    loop {
        let prompt = match game.state() {
            GameState::GameOver => "Type /reset to play again",
            GameState::RoundComplete => "Press Enter for the next word",
            GameState::Idle | GameState::AwaitingGuess => "Guess a letter",
        };

        let Some(line) = read_line(prompt, input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Reset => {
                game.reset();
                println!("\n🔄 Game reset!");
                start_round(game);
            }
            Command::Guess(text) => match game.state() {
                GameState::RoundComplete | GameState::Idle => {
                    if !start_round(game) {
                        println!("\n🏆 You solved every word! Type /reset to start over.\n");
                    }
                }
                GameState::GameOver => {
                    println!("{}", "The game is over. Type /reset to play again.".red());
                }
                GameState::AwaitingGuess => submit(game, &text),
            },
        }
    }
}

fn submit(game: &mut Game, text: &str) {
    let character = match parse_guess(text) {
        Ok(character) => character,
        Err(e) => {
            println!("{}", format!("❌ {e}").red());
            return;
        }
    };

    match game.submit(character) {
        Ok(result) => {
            print_guess_result(game, result, character);
            if result != GuessResult::GameOver {
                print_round_status(game);
            }
        }
        Err(e) => println!("{}", format!("❌ {e}").red()),
    }
}

/// Start a round and show it; false if the pool is empty
fn start_round(game: &mut Game) -> bool {
    match game.start_round() {
        Ok(word) => {
            println!("\n{}", "─".repeat(60).cyan());
            println!(" New word: {} letters", word.len());
            println!("{}", "─".repeat(60).cyan());
            print_round_status(game);
            true
        }
        Err(e) => {
            log::warn!("could not start round: {e}");
            false
        }
    }
}

fn print_help() {
    println!("Guess the hidden word one letter at a time.");
    println!("Commands: '/reset' to start over, '/help' for this text, '/quit' to exit\n");
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    #[test]
    fn command_parse() {
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/reset"), Command::Reset);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("a"), Command::Guess("a".to_string()));
        assert_eq!(Command::parse(""), Command::Guess(String::new()));
    }

    #[test]
    fn plays_a_round_from_input() {
        let mut game = Game::with_seed(words_from_slice(&["cat"]), GameConfig::default(), 1);
        let mut input = Cursor::new("a\nxy\nt\nc\n/quit\n");

        run_simple_with(&mut game, &mut input).unwrap();

        assert_eq!(game.state(), GameState::RoundComplete);
        assert_eq!(game.counters().score, 3);
        assert_eq!(game.counters().round, 1);
    }

    #[test]
    fn reset_command_restarts() {
        let mut game = Game::with_seed(
            words_from_slice(&["cat"]),
            GameConfig::default().with_threshold(Some(1)),
            1,
        );
        let mut input = Cursor::new("z\nq\n/reset\n");

        run_simple_with(&mut game, &mut input).unwrap();

        assert_eq!(game.state(), GameState::AwaitingGuess);
        assert_eq!(game.counters().round, 1);
        assert_eq!(game.counters().wrong_tries, 0);
        assert_eq!(game.counters().score, 0);
    }

    #[test]
    fn empty_pool_ends_immediately() {
        let mut game = Game::with_seed(Vec::new(), GameConfig::default(), 1);
        let mut input = Cursor::new("a\n");

        run_simple_with(&mut game, &mut input).unwrap();
        assert_eq!(game.state(), GameState::Idle);
    }
}

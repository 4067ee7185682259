//! Display functions for the line-based front end and command results

use super::formatters::{counters_line, create_progress_bar, result_message, tries_bar};
use crate::commands::SimulationResult;
use crate::game::{Game, GuessResult};
use colored::Colorize;

/// Print the mask and counters of the current round
pub fn print_round_status(game: &Game) {
    if let Some(mask) = game.render_mask() {
        println!(
            "\n    {}   {}",
            mask.render_with('_', " ").bright_white().bold(),
            format!("({} hidden)", mask.hidden()).bright_black()
        );
    }
    println!(
        "    {}",
        counters_line(game.counters(), game.config()).bright_black()
    );
    if let (Some(limit), Some(left)) = (game.config().failure_threshold, game.tries_left()) {
        let bar = tries_bar(game.counters().wrong_tries, limit, 20);
        let left_text = format!("{left} tries left");
        let left_text = if left <= 2 {
            left_text.red().bold()
        } else {
            left_text.normal()
        };
        println!("    {} {left_text}", bar.red());
    }
}

/// Print the outcome of one guess
pub fn print_guess_result(game: &Game, result: GuessResult, character: char) {
    let word = game.current_word().map_or("", |w| w.text());
    let (title, message) = result_message(result, character, word);

    match result {
        GuessResult::RoundComplete => {
            println!(
                "\n{} {}",
                format!("🎉 {title}!").bright_green().bold(),
                message
            );
        }
        GuessResult::GameOver => {
            println!("\n{}", "═".repeat(60).red());
            println!("  {}", format!("💀 {}", title.to_uppercase()).red().bold());
            println!("  {message}");
            println!("{}", "═".repeat(60).red());
        }
        _ if result.is_wrong() => {
            println!("{} {}", format!("✗ {title}:").red().bold(), message);
        }
        _ => println!("✓ {message}"),
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sessions:".bright_cyan().bold());
    println!("   Player:            {}", result.player);
    println!("   Sessions played:   {}", result.sessions);
    println!(
        "   Rounds completed:  {} ({} per session)",
        result.total_rounds_completed,
        format!("{:.2}", result.average_rounds_completed)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Ended by game over: {} ({:.1}%)",
        result.game_overs,
        result.game_over_rate() * 100.0
    );
    println!(
        "   Pool exhausted:    {}",
        result.sessions - result.game_overs
    );

    println!("\n🎯 {}", "Score:".bright_cyan().bold());
    println!(
        "   Average:           {}",
        format!("{:.2}", result.average_score).bright_yellow()
    );
    println!(
        "   Best:              {}",
        result.best_score.to_string().green()
    );
    println!(
        "   Worst:             {}",
        result.worst_score.to_string().red()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Rounds completed per session:".bright_cyan().bold());
    for (&rounds, &count) in &result.rounds_distribution {
        let pct = count as f64 / result.sessions as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {rounds:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

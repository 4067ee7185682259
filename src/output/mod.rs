//! Terminal output formatting
//!
//! Display utilities for the line-based game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_guess_result, print_round_status, print_simulation_result};

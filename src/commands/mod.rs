//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{run_simple, run_simple_with};
pub use simulate::{Player, SessionResult, SimulationResult, play_session, run_simulation};

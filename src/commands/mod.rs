//! Command implementations

pub mod run;

pub use run::{RunConfig, RunStatistics, choose_games, run_bot, run_sequential};

//! Terminal output formatting
//!
//! Display utilities for transcripts and run statistics.

pub mod display;
pub mod formatters;

pub use display::{
    outcome_summary, print_game_report, print_interactive_result, print_statistics,
};

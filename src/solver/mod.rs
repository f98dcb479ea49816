//! Guessing bots and candidate elimination
//!
//! The filter narrows a word list to the words consistent with a game's
//! history; strategies decide which of them to guess next.

pub mod filter;
pub mod frequency;
pub mod strategy;

pub use filter::{Constraints, filter_candidates, is_consistent};
pub use frequency::LetterFrequencies;
pub use strategy::{
    FirstCandidateStrategy, FrequencyStrategy, LinearScanStrategy, Strategy, StrategyType,
};

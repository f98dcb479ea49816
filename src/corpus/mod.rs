//! Word corpora
//!
//! Corpus files hold one word per line. Loading keeps file order and does
//! not remove duplicates.

pub mod loader;

pub use loader::{load_corpus, parse_corpus, words_from_slice};

/// Corpus file used when none is given on the command line
pub const DEFAULT_CORPUS: &str = "webster-2-all-five-letter.corpus";

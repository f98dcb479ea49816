//! Guess the Word
//!
//! A fixed-length word guessing game. A hidden goal word is scored against
//! each guess, and bots narrow the words still consistent with the feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_the_word::core::{History, Word, evaluate};
//! use guess_the_word::solver::filter_candidates;
//!
//! let goal = Word::new("cross").unwrap();
//! let guess = Word::new("brush").unwrap();
//!
//! let (signature, correct) = evaluate(&goal, &guess).unwrap();
//! assert_eq!(signature.to_string(), "#+#+#");
//! assert_eq!(correct, 2);
//!
//! let mut history = History::new();
//! history.push(guess, signature);
//!
//! let words: Vec<Word> = ["crass", "cross", "dress"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let remaining = filter_candidates(&words, &history);
//! assert_eq!(remaining.len(), 3);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Candidate elimination and guessing strategies
pub mod solver;

// Game engine and turn loop
pub mod game;

// Corpus files
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive console play
pub mod interactive;

pub use error::{GameError, Result};

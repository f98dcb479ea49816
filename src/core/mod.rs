//! Core domain types for the guessing game
//!
//! Words, signatures, the evaluator and per-game history. Everything here is
//! pure: no I/O and no shared state.

mod history;
mod signature;
mod word;

pub use history::{GuessRecord, History};
pub use signature::{
    LETTER_ABSENT, LETTER_CORRECT, LETTER_PRESENT, LetterOutcome, Signature, evaluate, humanize,
    try_humanize,
};
pub use word::{WORD_LENGTH, Word, WordError};

//! Guess selection strategies
//!
//! Defines the Strategy trait and the bot implementations.

use super::filter::filter_candidates;
use super::frequency::LetterFrequencies;
use crate::core::{History, Word};
use crate::error::{GameError, Result};

/// A policy that picks the next guess
///
/// Everything a strategy knows about the current game arrives through
/// `history`; an empty history means a new game has started.
pub trait Strategy {
    /// Name shown in statistics and transcripts
    fn name(&self) -> &'static str;

    /// Pick the next guess from `words`
    ///
    /// `last_correct` is the number of correct letters in the most recent
    /// guess (0 at the start of a game). Returns `None` when the strategy has
    /// nothing left to offer.
    fn next_guess(&mut self, words: &[Word], history: &History, last_correct: usize)
    -> Option<Word>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_guess(
        &mut self,
        words: &[Word],
        history: &History,
        last_correct: usize,
    ) -> Option<Word> {
        (**self).next_guess(words, history, last_correct)
    }
}

/// Enum wrapper for the bot strategies
///
/// Allows runtime selection while keeping static dispatch. Bots hold no
/// per-game state, so one value can be cloned into every game.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Guess the corpus in order
    Linear(LinearScanStrategy),
    /// First remaining candidate
    First(FirstCandidateStrategy),
    /// Highest letter-frequency candidate
    Frequency(FrequencyStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Linear(s) => s.name(),
            Self::First(s) => s.name(),
            Self::Frequency(s) => s.name(),
        }
    }

    fn next_guess(
        &mut self,
        words: &[Word],
        history: &History,
        last_correct: usize,
    ) -> Option<Word> {
        match self {
            Self::Linear(s) => s.next_guess(words, history, last_correct),
            Self::First(s) => s.next_guess(words, history, last_correct),
            Self::Frequency(s) => s.next_guess(words, history, last_correct),
        }
    }
}

impl StrategyType {
    /// Create a bot from its name
    ///
    /// Supported names: "linear" (or "scan"), "first" (or "gmobot"),
    /// "frequency" (or "freq"). The frequency table is built from `master`.
    ///
    /// # Errors
    /// Returns `GameError::UnknownStrategy` for any other name.
    pub fn from_name(name: &str, master: &[Word]) -> Result<Self> {
        match name {
            "linear" | "scan" => Ok(Self::Linear(LinearScanStrategy)),
            "first" | "gmobot" => Ok(Self::First(FirstCandidateStrategy)),
            "frequency" | "freq" => Ok(Self::Frequency(FrequencyStrategy::new(master))),
            other => Err(GameError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Fixed linear scan: the n-th guess of a game is the n-th word
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanStrategy;

impl Strategy for LinearScanStrategy {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn next_guess(&mut self, words: &[Word], history: &History, _: usize) -> Option<Word> {
        words.get(history.len()).cloned()
    }
}

/// Guess the first word still consistent with the history
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn name(&self) -> &'static str {
        "first"
    }

    fn next_guess(&mut self, words: &[Word], history: &History, _: usize) -> Option<Word> {
        filter_candidates(words, history).first().map(|&w| w.clone())
    }
}

/// Guess the candidate whose distinct letters are most common in the corpus
///
/// Ties go to the earliest candidate in word-list order.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    frequencies: LetterFrequencies,
}

impl FrequencyStrategy {
    /// Build the frequency table from `corpus`
    #[must_use]
    pub fn new(corpus: &[Word]) -> Self {
        Self {
            frequencies: LetterFrequencies::from_words(corpus),
        }
    }
}

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn next_guess(&mut self, words: &[Word], history: &History, _: usize) -> Option<Word> {
        filter_candidates(words, history)
            .into_iter()
            .rev()
            .max_by(|a, b| {
                self.frequencies
                    .score(a)
                    .total_cmp(&self.frequencies.score(b))
            })
            .cloned()
    }
}

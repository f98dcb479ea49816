//! Per-game guess history

use super::{Signature, Word};

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    signature: Signature,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, signature: Signature) -> Self {
        Self { guess, signature }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// Append-only record of one game's guesses
///
/// A fresh History means a new game; it is never carried across games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<GuessRecord>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a scored guess
    pub fn push(&mut self, guess: Word, signature: Signature) {
        self.records.push(GuessRecord::new(guess, signature));
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record, if any
    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    /// Whether `word` has already been guessed this game
    #[must_use]
    pub fn contains_guess(&self, word: &Word) -> bool {
        self.records.iter().any(|r| r.guess == *word)
    }

    /// Wire-format signatures in guess order
    #[must_use]
    pub fn signatures(&self) -> Vec<String> {
        self.records.iter().map(|r| r.signature.to_string()).collect()
    }
}

impl FromIterator<GuessRecord> for History {
    fn from_iter<I: IntoIterator<Item = GuessRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn record(goal: &str, guess: &str) -> (Word, Signature) {
        let goal = Word::new(goal).unwrap();
        let guess = Word::new(guess).unwrap();
        let (signature, _) = evaluate(&goal, &guess).unwrap();
        (guess, signature)
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        assert!(history.signatures().is_empty());
    }

    #[test]
    fn push_appends_in_order() {
        let mut history = History::new();
        let (g1, s1) = record("rural", "tears");
        let (g2, s2) = record("rural", "cloud");
        history.push(g1.clone(), s1);
        history.push(g2.clone(), s2);

        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].guess(), &g1);
        assert_eq!(history.last().unwrap().guess(), &g2);
        assert_eq!(history.signatures(), vec!["##**#", "#*#*#"]);
    }

    #[test]
    fn contains_guess() {
        let mut history = History::new();
        let (guess, signature) = record("rural", "aural");
        history.push(guess.clone(), signature);

        assert!(history.contains_guess(&guess));
        assert!(!history.contains_guess(&Word::new("rural").unwrap()));
    }
}

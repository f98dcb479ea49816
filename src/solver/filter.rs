//! Candidate elimination
//!
//! Turns a game's history into explicit constraints and keeps the master-list
//! words that satisfy all of them:
//! - per-position fixed letters (from `Correct`)
//! - per-position excluded letters (from `Present` and `Absent`)
//! - per-letter lower bounds: a guess with k `Correct`/`Present` marks for a
//!   letter proves at least k occurrences
//! - per-letter upper bounds: if that guess also marks the letter `Absent`
//!   somewhere, the goal holds exactly k occurrences (zero bans the letter)
//!
//! Bounds from different guesses are intersected, so the result depends only
//! on the set of records and never on their order.

use crate::core::{GuessRecord, History, LetterOutcome, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

const ALPHABET: usize = 26;

/// Bit for `letter` in a per-position exclusion mask
#[inline]
const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Occurrence count of every letter in `word`
fn letter_counts(word: &Word) -> [usize; ALPHABET] {
    let mut counts = [0; ALPHABET];
    for &ch in word.chars() {
        counts[usize::from(ch - b'a')] += 1;
    }
    counts
}

/// Everything a history proves about the goal word
#[derive(Clone, Default)]
pub struct Constraints {
    length: Option<usize>,
    fixed: Vec<Option<u8>>,
    excluded: Vec<u32>,
    min_counts: FxHashMap<u8, usize>,
    max_counts: FxHashMap<u8, usize>,
    guessed: FxHashSet<Word>,
    contradictory: bool,
}

impl Constraints {
    /// Build constraints from every record in `history`
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        let mut constraints = Self::default();
        for record in history {
            constraints.add_record(record);
        }
        constraints
    }

    /// Tighten the constraints with one more record
    pub fn add_record(&mut self, record: &GuessRecord) {
        let guess = record.guess();
        let outcomes = record.signature().outcomes();
        self.guessed.insert(guess.clone());

        if outcomes.len() != guess.len() {
            log::warn!(
                "record for {guess} has a {}-position signature; no candidate can match",
                outcomes.len()
            );
            self.contradictory = true;
            return;
        }

        match self.length {
            None => {
                self.length = Some(guess.len());
                self.fixed = vec![None; guess.len()];
                self.excluded = vec![0; guess.len()];
            }
            Some(len) if len != guess.len() => {
                self.contradictory = true;
                return;
            }
            Some(_) => {}
        }

        let mut matched: FxHashMap<u8, usize> = FxHashMap::default();
        let mut absent: FxHashSet<u8> = FxHashSet::default();

        for (i, (&letter, &outcome)) in guess.chars().iter().zip(outcomes).enumerate() {
            match outcome {
                LetterOutcome::Correct => {
                    if self.fixed[i].is_some_and(|f| f != letter) {
                        self.contradictory = true;
                    }
                    self.fixed[i] = Some(letter);
                    *matched.entry(letter).or_insert(0) += 1;
                }
                LetterOutcome::Present => {
                    self.excluded[i] |= letter_bit(letter);
                    *matched.entry(letter).or_insert(0) += 1;
                }
                LetterOutcome::Absent => {
                    self.excluded[i] |= letter_bit(letter);
                    absent.insert(letter);
                }
            }
        }

        for (&letter, &k) in &matched {
            let min = self.min_counts.entry(letter).or_insert(0);
            *min = (*min).max(k);
        }

        for letter in absent {
            let k = matched.get(&letter).copied().unwrap_or(0);
            let max = self.max_counts.entry(letter).or_insert(k);
            *max = (*max).min(k);
        }
    }

    /// Lower bound on occurrences of `letter`
    #[must_use]
    pub fn min_count(&self, letter: u8) -> usize {
        self.min_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Upper bound on occurrences of `letter`, if any guess proved one
    #[must_use]
    pub fn max_count(&self, letter: u8) -> Option<usize> {
        self.max_counts.get(&letter).copied()
    }

    /// Letter fixed at `position`, if known
    #[must_use]
    pub fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed.get(position).copied().flatten()
    }

    /// Whether no word at all can satisfy these constraints
    ///
    /// Only detects contradictions visible without a word list: conflicting
    /// fixed letters, mixed lengths and crossed bounds.
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.contradictory
            || self
                .min_counts
                .iter()
                .any(|(letter, &min)| self.max_count(*letter).is_some_and(|max| min > max))
    }

    /// Whether `word` is still a possible goal
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        if self.contradictory || self.guessed.contains(word) {
            return false;
        }

        if let Some(len) = self.length
            && word.len() != len
        {
            return false;
        }

        for (i, &letter) in word.chars().iter().enumerate() {
            // A fixed position takes precedence over any exclusion there
            match self.fixed.get(i).copied().flatten() {
                Some(fixed) if fixed != letter => return false,
                Some(_) => {}
                None => {
                    if self.excluded.get(i).is_some_and(|&mask| mask & letter_bit(letter) != 0) {
                        return false;
                    }
                }
            }
        }

        let counts = letter_counts(word);
        let count = |letter: u8| counts[usize::from(letter - b'a')];

        self.min_counts.iter().all(|(&l, &min)| count(l) >= min)
            && self.max_counts.iter().all(|(&l, &max)| count(l) <= max)
    }
}

impl fmt::Debug for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed: String = self
            .fixed
            .iter()
            .map(|slot| slot.map_or('.', char::from))
            .collect();
        let mut min: Vec<_> = self
            .min_counts
            .iter()
            .map(|(&l, &n)| format!("{}>={n}", char::from(l)))
            .collect();
        min.sort();
        let mut max: Vec<_> = self
            .max_counts
            .iter()
            .map(|(&l, &n)| format!("{}<={n}", char::from(l)))
            .collect();
        max.sort();

        f.debug_struct("Constraints")
            .field("fixed", &fixed)
            .field("min", &min)
            .field("max", &max)
            .field("guessed", &self.guessed.len())
            .field("contradictory", &self.contradictory)
            .finish()
    }
}

/// Words from `master` still consistent with every record in `history`
///
/// Recomputed from scratch on every call. Candidates keep master-list order;
/// duplicate master entries appear once. Words already guessed are left out.
///
/// # Examples
/// ```
/// use guess_the_word::core::{History, Word, evaluate};
/// use guess_the_word::solver::filter_candidates;
///
/// let master: Vec<Word> = ["taken", "tater", "taxes", "tapet"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let goal = Word::new("taken").unwrap();
/// let guess = Word::new("tater").unwrap();
/// let (signature, _) = evaluate(&goal, &guess).unwrap();
///
/// let mut history = History::new();
/// history.push(guess, signature);
///
/// // "tapet" has a second 't', which "++#+#" rules out
/// let remaining: Vec<&str> = filter_candidates(&master, &history)
///     .iter()
///     .map(|w| w.text())
///     .collect();
/// assert_eq!(remaining, ["taken", "taxes"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(master: &'a [Word], history: &History) -> Vec<&'a Word> {
    let constraints = Constraints::from_history(history);
    log::trace!("{constraints:?}");

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let candidates: Vec<&Word> = master
        .iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .filter(|word| seen.insert(word.text()))
        .collect();

    log::debug!(
        "{} of {} words remain after {} guesses",
        candidates.len(),
        master.len(),
        history.len()
    );
    candidates
}

/// Brute-force check: would `word` as the goal reproduce every signature?
#[must_use]
pub fn is_consistent(word: &Word, history: &History) -> bool {
    history.records().iter().all(|record| {
        crate::core::evaluate(word, record.guess())
            .is_ok_and(|(signature, _)| signature == *record.signature())
    })
}

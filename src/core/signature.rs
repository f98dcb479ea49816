//! Guess feedback: letter outcomes, signatures and the evaluator
//!
//! A signature has one outcome per guess position. On the wire it is a string
//! over `+` (correct), `*` (present elsewhere) and `#` (absent), in guess
//! order. For people it is rendered with uppercase letters for correct
//! positions, lowercase letters for misplaced ones and `-` for absent ones.

use super::Word;
use crate::error::{GameError, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// Wire character for [`LetterOutcome::Correct`]
pub const LETTER_CORRECT: char = '+';
/// Wire character for [`LetterOutcome::Present`]
pub const LETTER_PRESENT: char = '*';
/// Wire character for [`LetterOutcome::Absent`]
pub const LETTER_ABSENT: char = '#';

/// Placeholder drawn in place of an unrecognised signature character
const RENDER_PLACEHOLDER: char = '?';

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterOutcome {
    /// Right letter, right position
    Correct,
    /// Letter occurs among the goal's unmatched positions
    Present,
    /// No unmatched occurrence of the letter is left in the goal
    Absent,
}

impl LetterOutcome {
    /// Wire character for this outcome
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => LETTER_CORRECT,
            Self::Present => LETTER_PRESENT,
            Self::Absent => LETTER_ABSENT,
        }
    }

    /// Parse a wire character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            LETTER_CORRECT => Some(Self::Correct),
            LETTER_PRESENT => Some(Self::Present),
            LETTER_ABSENT => Some(Self::Absent),
            _ => None,
        }
    }

    /// True for `Correct` and `Present`, the outcomes that prove an occurrence
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

/// Ordered per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<LetterOutcome>);

impl Signature {
    /// Build a signature from outcomes
    #[must_use]
    pub const fn new(outcomes: Vec<LetterOutcome>) -> Self {
        Self(outcomes)
    }

    /// All-correct signature of the given length
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self(vec![LetterOutcome::Correct; len])
    }

    /// Outcomes in guess order
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[LetterOutcome] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `Correct` positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterOutcome::Correct)
    }

    /// Number of `Present` positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterOutcome::Present)
    }

    fn count(&self, outcome: LetterOutcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// Render for people next to the guess that produced it
    ///
    /// # Examples
    /// ```
    /// use guess_the_word::core::{Word, evaluate};
    ///
    /// let goal = Word::new("rural").unwrap();
    /// let guess = Word::new("aural").unwrap();
    /// let (signature, _) = evaluate(&goal, &guess).unwrap();
    /// assert_eq!(signature.humanize(&guess), "-URAL");
    /// ```
    #[must_use]
    pub fn humanize(&self, guess: &Word) -> String {
        self.0
            .iter()
            .zip(guess.chars())
            .map(|(outcome, &letter)| match outcome {
                LetterOutcome::Correct => char::from(letter).to_ascii_uppercase(),
                LetterOutcome::Present => char::from(letter),
                LetterOutcome::Absent => '-',
            })
            .collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            write!(f, "{}", outcome.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Signature {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, character)| {
                LetterOutcome::from_char(character).ok_or(
                    GameError::MalformedSignatureCharacter {
                        character,
                        position,
                    },
                )
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

/// Score `guess` against `goal`
///
/// Returns the signature and the number of `Correct` positions.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct`; they claim their goal letter.
/// 2. Pool the goal letters left unmatched, counted per letter.
/// 3. Second pass: each remaining guess position takes one letter from the
///    pool if one is left (`Present`), otherwise it is `Absent`.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use guess_the_word::core::{Word, evaluate};
///
/// let goal = Word::new("taken").unwrap();
/// let guess = Word::new("tater").unwrap();
/// let (signature, correct) = evaluate(&goal, &guess).unwrap();
///
/// // The second 't' finds the goal's only 't' already claimed
/// assert_eq!(signature.to_string(), "++#+#");
/// assert_eq!(correct, 3);
/// ```
pub fn evaluate(goal: &Word, guess: &Word) -> Result<(Signature, usize)> {
    if guess.len() != goal.len() {
        return Err(GameError::LengthMismatch {
            expected: goal.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![LetterOutcome::Absent; goal.len()];
    let mut unmatched: FxHashMap<u8, usize> = FxHashMap::default();
    let mut correct = 0;

    for (i, (&g, &t)) in guess.chars().iter().zip(goal.chars()).enumerate() {
        if g == t {
            result[i] = LetterOutcome::Correct;
            correct += 1;
        } else {
            *unmatched.entry(t).or_insert(0) += 1;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterOutcome::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&g)
            && *count > 0
        {
            *count -= 1;
            result[i] = LetterOutcome::Present;
        }
    }

    Ok((Signature(result), correct))
}

/// Render a wire signature strictly
///
/// # Errors
/// Returns `GameError::MalformedSignatureCharacter` for the first character
/// outside `+`, `*` and `#`.
pub fn try_humanize(signature: &str, guess: &str) -> Result<String> {
    signature
        .chars()
        .zip(guess.chars())
        .enumerate()
        .map(|(position, (character, letter))| {
            render_position(character, letter).ok_or(GameError::MalformedSignatureCharacter {
                character,
                position,
            })
        })
        .collect()
}

/// Render a wire signature, substituting `?` for malformed characters
///
/// Each malformed character is reported through the log instead of aborting.
///
/// # Examples
/// ```
/// use guess_the_word::core::humanize;
///
/// assert_eq!(humanize("++##*", "after"), "AF--r");
/// assert_eq!(humanize("+x#", "cat"), "C?-");
/// ```
#[must_use]
pub fn humanize(signature: &str, guess: &str) -> String {
    signature
        .chars()
        .zip(guess.chars())
        .enumerate()
        .map(|(position, (character, letter))| {
            render_position(character, letter).unwrap_or_else(|| {
                log::warn!(
                    "humanizing signature: {}",
                    GameError::MalformedSignatureCharacter {
                        character,
                        position
                    }
                );
                RENDER_PLACEHOLDER
            })
        })
        .collect()
}

fn render_position(character: char, letter: char) -> Option<char> {
    match LetterOutcome::from_char(character)? {
        LetterOutcome::Correct => Some(letter.to_ascii_uppercase()),
        LetterOutcome::Present => Some(letter),
        LetterOutcome::Absent => Some('-'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(goal: &str, guess: &str) -> (String, usize) {
        let goal = Word::new(goal).unwrap();
        let guess = Word::new(guess).unwrap();
        let (signature, correct) = evaluate(&goal, &guess).unwrap();
        (signature.to_string(), correct)
    }

    #[test]
    fn self_evaluation_is_all_correct() {
        for word in ["three", "blind", "mices", "aaaaa", "zz"] {
            let (signature, correct) = score(word, word);
            assert_eq!(signature, "+".repeat(word.len()));
            assert_eq!(correct, word.len());
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        assert_eq!(score("blind", "xyzzy"), ("#####".to_string(), 0));
        assert_eq!(score("three", "xyzzy"), ("#####".to_string(), 0));
    }

    #[test]
    fn repeated_guess_letter_claims_goal_letter_once() {
        assert_eq!(score("taken", "tater"), ("++#+#".to_string(), 3));
    }

    #[test]
    fn exact_match_wins_over_earlier_presence() {
        assert_eq!(score("cross", "brush"), ("#+#+#".to_string(), 2));
    }

    #[test]
    fn reversed_goal_is_all_present() {
        // "blind" reversed with the middle letter replaced
        assert_eq!(score("blind", "dnzlb"), ("**#**".to_string(), 0));
        assert_eq!(score("dlnib", "bizld"), ("**#**".to_string(), 0));
    }

    #[test]
    fn one_goal_letter_rewards_one_guess_letter() {
        // Only one 'a' in the goal: exactly one 'a' in the guess scores
        assert_eq!(score("alert", "aabbb"), ("+####".to_string(), 1));
        assert_eq!(score("plant", "aabbb"), ("*####".to_string(), 0));
    }

    #[test]
    fn presence_goes_to_earliest_unmatched_position() {
        assert_eq!(score("erase", "speed"), ("*#**#".to_string(), 0));
        assert_eq!(score("floor", "robot"), ("**#+#".to_string(), 1));
    }

    #[test]
    fn match_count_never_exceeds_goal_count() {
        let goals = ["taken", "cross", "speed", "aback", "llama"];
        let guesses = ["tater", "sassy", "eerie", "aaaaa", "allay"];
        for goal in goals {
            let goal = Word::new(goal).unwrap();
            for guess in guesses {
                let guess = Word::new(guess).unwrap();
                let (signature, _) = evaluate(&goal, &guess).unwrap();
                for (&letter, _) in &guess.char_counts() {
                    let matched = guess
                        .chars()
                        .iter()
                        .zip(signature.outcomes())
                        .filter(|&(&l, o)| l == letter && o.is_match())
                        .count();
                    assert!(matched <= goal.count_of(letter));
                }
            }
        }
    }

    #[test]
    fn length_mismatch_fails() {
        let goal = Word::new("three").unwrap();
        let guess = Word::new("mice").unwrap();
        assert!(matches!(
            evaluate(&goal, &guess),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        ));
    }

    #[test]
    fn evaluation_is_deterministic() {
        assert_eq!(score("llama", "allay"), score("llama", "allay"));
    }

    #[test]
    fn signature_wire_round_trip() {
        let signature: Signature = "+*#".parse().unwrap();
        assert_eq!(
            signature.outcomes(),
            &[
                LetterOutcome::Correct,
                LetterOutcome::Present,
                LetterOutcome::Absent
            ]
        );
        assert_eq!(signature.to_string(), "+*#");
        assert_eq!(signature.count_correct(), 1);
        assert_eq!(signature.count_present(), 1);
        assert!(!signature.is_solved());
        assert!(Signature::solved(5).is_solved());
    }

    #[test]
    fn signature_parse_rejects_unknown_characters() {
        let err = "++G##".parse::<Signature>().unwrap_err();
        assert!(matches!(
            err,
            GameError::MalformedSignatureCharacter {
                character: 'G',
                position: 2
            }
        ));
    }

    #[test]
    fn humanize_examples() {
        assert_eq!(humanize("++##*", "after"), "AF--r");
        assert_eq!(humanize("##***", "tears"), "--ars");
        assert_eq!(humanize("+++++", "rural"), "RURAL");
    }

    #[test]
    fn humanize_substitutes_placeholder() {
        assert_eq!(humanize("+!#", "cat"), "C?-");
    }

    #[test]
    fn try_humanize_reports_malformed() {
        assert_eq!(try_humanize("*#+", "cat").unwrap(), "c-T");
        assert!(matches!(
            try_humanize("*x+", "cat"),
            Err(GameError::MalformedSignatureCharacter {
                character: 'x',
                position: 1
            })
        ));
    }

    #[test]
    fn typed_humanize_matches_wire_humanize() {
        let goal = Word::new("cross").unwrap();
        let guess = Word::new("brush").unwrap();
        let (signature, _) = evaluate(&goal, &guess).unwrap();
        assert_eq!(
            signature.humanize(&guess),
            humanize(&signature.to_string(), guess.text())
        );
        assert_eq!(signature.humanize(&guess), "-R-S-");
    }
}

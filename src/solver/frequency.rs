//! Letter frequency scoring
//!
//! Relative frequency of each letter across a corpus, used by the
//! frequency strategy to rank candidates.

use crate::core::Word;

/// Relative frequency of each letter `a..=z` in a corpus
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies([f64; 26]);

impl LetterFrequencies {
    /// Count every letter occurrence in `words` and normalise by the total
    ///
    /// An empty corpus gives all-zero frequencies.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts = [0usize; 26];
        let mut total = 0usize;
        for word in words {
            for &ch in word.chars() {
                counts[usize::from(ch - b'a')] += 1;
                total += 1;
            }
        }

        let mut frequencies = [0.0; 26];
        if total > 0 {
            for (freq, &count) in frequencies.iter_mut().zip(&counts) {
                *freq = count as f64 / total as f64;
            }
        }
        Self(frequencies)
    }

    /// Relative frequency of `letter`
    #[must_use]
    pub fn of(&self, letter: u8) -> f64 {
        self.0[usize::from(letter - b'a')]
    }

    /// Sum of the frequencies of the word's distinct letters
    ///
    /// Repeated letters count once, so words that probe more distinct
    /// letters score higher.
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        let mut seen = 0u32;
        let mut total = 0.0;
        for &ch in word.chars() {
            let bit = 1 << (ch - b'a');
            if seen & bit == 0 {
                seen |= bit;
                total += self.of(ch);
            }
        }
        total
    }
}

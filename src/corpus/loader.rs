//! Corpus loading utilities

use crate::core::Word;
use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;

/// Load a corpus file
///
/// Lines are trimmed and blank lines skipped. With `length` set, words of
/// any other length are skipped too. Invalid lines are logged and dropped.
///
/// # Errors
///
/// Returns `GameError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use guess_the_word::corpus::load_corpus;
///
/// let words = load_corpus("wordle.corpus", Some(5)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_corpus<P: AsRef<Path>>(path: P, length: Option<usize>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_corpus(&content, length);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse corpus text already in memory
#[must_use]
pub fn parse_corpus(content: &str, length: Option<usize>) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }

            let parsed = match length {
                Some(len) => Word::with_length(trimmed, len),
                None => Word::new(trimmed),
            };
            parsed
                .map_err(|err| log::warn!("skipping corpus line {}: {trimmed:?}: {err}", index + 1))
                .ok()
        })
        .collect()
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use guess_the_word::corpus::words_from_slice;
///
/// let words = words_from_slice(&["three", "blind", "m1ce"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

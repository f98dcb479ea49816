//! Error types shared across the game
//!
//! Evaluation errors are local to one game attempt; corpus and configuration
//! errors abort the whole run.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the game engine, evaluator, renderer and loaders
#[derive(Debug, Error)]
pub enum GameError {
    /// Guess and goal differ in length
    #[error("guess has {actual} letters but the goal has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The corpus contained no usable words
    #[error("corpus contains no words")]
    EmptyCorpus,

    /// A corpus or goal file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A signature string held something other than `+`, `*` or `#`
    #[error("invalid character {character:?} at position {position} in signature")]
    MalformedSignatureCharacter { character: char, position: usize },

    /// A word failed validation
    #[error("invalid word {text:?}: {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },

    /// A strategy name not known to the CLI
    #[error("unknown strategy {0:?} (expected interactive, linear, first or frequency)")]
    UnknownStrategy(String),
}

/// Result alias for game operations
pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let err = GameError::LengthMismatch {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "guess has 4 letters but the goal has 5");
    }

    #[test]
    fn malformed_character_message() {
        let err = GameError::MalformedSignatureCharacter {
            character: 'x',
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid character 'x' at position 2 in signature"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = GameError::Io {
            path: PathBuf::from("missing.corpus"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("cannot read missing.corpus"));
        assert!(err.source().is_some());
    }
}

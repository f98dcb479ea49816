//! The turn loop for a single game

use super::Game;
use crate::core::{History, Word};
use crate::error::GameError;
use crate::solver::Strategy;

/// Default cap on guesses per game
pub const MAX_TRIES: usize = 6;

/// How a game ended
#[derive(Debug)]
pub enum GameOutcome {
    /// Every letter correct after `tries` guesses
    Solved { tries: usize },
    /// The try limit ran out first
    Exhausted,
    /// The strategy had no guess to offer
    GaveUp,
    /// A guess could not be scored
    Aborted(GameError),
}

/// Everything that happened in one game
#[derive(Debug)]
pub struct GameReport {
    pub strategy: &'static str,
    pub goal: Word,
    pub history: History,
    pub outcome: GameOutcome,
}

impl GameReport {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, GameOutcome::Solved { .. })
    }

    /// Number of guesses scored
    #[must_use]
    pub fn tries(&self) -> usize {
        self.history.len()
    }
}

/// Play `game` to the end with `strategy` choosing from `words`
///
/// The history starts empty and lives only for this call, so nothing
/// carries over between games. Scoring errors end this game only.
pub fn play_game<S: Strategy + ?Sized>(
    game: &Game,
    strategy: &mut S,
    words: &[Word],
    max_tries: usize,
) -> GameReport {
    let mut history = History::new();
    let mut last_correct = 0;

    let outcome = loop {
        if history.len() >= max_tries {
            break GameOutcome::Exhausted;
        }

        let Some(guess) = strategy.next_guess(words, &history, last_correct) else {
            break GameOutcome::GaveUp;
        };

        let (signature, correct) = match game.score(&guess) {
            Ok(scored) => scored,
            Err(err) => {
                log::warn!("{}: cannot score {guess}: {err}", strategy.name());
                break GameOutcome::Aborted(err);
            }
        };

        log::trace!("{}: {guess} -> {signature}", strategy.name());
        let solved = signature.is_solved();
        history.push(guess, signature);
        last_correct = correct;

        if solved {
            break GameOutcome::Solved {
                tries: history.len(),
            };
        }
    };

    log::debug!(
        "{} on {}: {:?} after {} guesses",
        strategy.name(),
        game.goal(),
        outcome,
        history.len()
    );

    GameReport {
        strategy: strategy.name(),
        goal: game.goal().clone(),
        history,
        outcome,
    }
}

//! Game engine and the per-game turn loop

mod engine;
mod session;

pub use engine::{Game, GameEngine};
pub use session::{GameOutcome, GameReport, MAX_TRIES, play_game};

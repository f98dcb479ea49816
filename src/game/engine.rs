//! Game engine: owns the corpus and deals out goal words

use crate::core::{Signature, Word, evaluate};
use crate::error::{GameError, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Chooses goal words from a corpus
pub struct GameEngine {
    corpus: Vec<Word>,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine seeded from the OS
    ///
    /// # Errors
    /// Returns `GameError::EmptyCorpus` if `corpus` is empty.
    pub fn new(corpus: Vec<Word>) -> Result<Self> {
        Self::build(corpus, StdRng::from_os_rng())
    }

    /// Create an engine with a reproducible goal sequence
    ///
    /// # Errors
    /// Returns `GameError::EmptyCorpus` if `corpus` is empty.
    pub fn with_seed(corpus: Vec<Word>, seed: u64) -> Result<Self> {
        Self::build(corpus, StdRng::seed_from_u64(seed))
    }

    fn build(corpus: Vec<Word>, rng: StdRng) -> Result<Self> {
        if corpus.is_empty() {
            return Err(GameError::EmptyCorpus);
        }
        Ok(Self { corpus, rng })
    }

    #[must_use]
    pub fn corpus(&self) -> &[Word] {
        &self.corpus
    }

    /// Start a game with a uniformly random goal from the corpus
    pub fn new_game(&mut self) -> Game {
        let index = self.rng.random_range(0..self.corpus.len());
        Game::new(self.corpus[index].clone())
    }

    /// Start a game with a chosen goal, which need not be in the corpus
    #[must_use]
    pub fn fixed_game(&self, goal: Word) -> Game {
        Game::new(goal)
    }
}

/// One game's hidden goal
#[derive(Debug, Clone)]
pub struct Game {
    goal: Word,
}

impl Game {
    #[must_use]
    pub const fn new(goal: Word) -> Self {
        Self { goal }
    }

    /// Reveal the goal
    #[must_use]
    pub const fn goal(&self) -> &Word {
        &self.goal
    }

    /// Score a guess against the goal
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the guess has the wrong length.
    pub fn score(&self, guess: &Word) -> Result<(Signature, usize)> {
        evaluate(&self.goal, guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Word> {
        ["three", "blind", "mices"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn empty_corpus_is_rejected() {
        assert!(matches!(GameEngine::new(Vec::new()), Err(GameError::EmptyCorpus)));
        assert!(matches!(
            GameEngine::with_seed(Vec::new(), 7),
            Err(GameError::EmptyCorpus)
        ));
    }

    #[test]
    fn new_game_picks_from_corpus() {
        let mut engine = GameEngine::new(corpus()).unwrap();
        for _ in 0..20 {
            let game = engine.new_game();
            assert!(engine.corpus().contains(game.goal()));
        }
    }

    #[test]
    fn seeded_engines_agree() {
        let mut a = GameEngine::with_seed(corpus(), 42).unwrap();
        let mut b = GameEngine::with_seed(corpus(), 42).unwrap();
        for _ in 0..10 {
            assert_eq!(a.new_game().goal(), b.new_game().goal());
        }
    }

    #[test]
    fn fixed_game_accepts_outside_words() {
        let engine = GameEngine::new(corpus()).unwrap();
        let game = engine.fixed_game(Word::new("xyzzy").unwrap());
        assert_eq!(game.goal().text(), "xyzzy");
    }

    #[test]
    fn score_matches_reference_cases() {
        let engine = GameEngine::new(corpus()).unwrap();
        let game = engine.fixed_game(Word::new("blind").unwrap());

        let (signature, correct) = game.score(&Word::new("xyzzy").unwrap()).unwrap();
        assert_eq!((signature.to_string().as_str(), correct), ("#####", 0));

        let (signature, correct) = game.score(game.goal()).unwrap();
        assert_eq!((signature.to_string().as_str(), correct), ("+++++", 5));

        let (signature, correct) = game.score(&Word::new("dnzlb").unwrap()).unwrap();
        assert_eq!((signature.to_string().as_str(), correct), ("**#**", 0));

        assert!(matches!(
            game.score(&Word::new("mice").unwrap()),
            Err(GameError::LengthMismatch { .. })
        ));
    }
}

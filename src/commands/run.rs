//! Batch runs: many games, one strategy, aggregated statistics

use crate::core::Word;
use crate::game::{Game, GameEngine, GameOutcome, GameReport, MAX_TRIES, play_game};
use crate::solver::{Strategy, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings shared by every game in a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub max_tries: usize,
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_tries: MAX_TRIES,
            show_progress: false,
        }
    }
}

/// Aggregate results for one strategy
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    pub strategy: String,
    pub games: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub gave_up: usize,
    pub aborted: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub average_tries: f64,
    pub min_tries: usize,
    pub max_tries: usize,
    pub total_time: Duration,
}

impl RunStatistics {
    /// Summarise finished games
    ///
    /// Averages and extremes cover solved games only.
    #[must_use]
    pub fn from_reports(strategy: &str, reports: &[GameReport], total_time: Duration) -> Self {
        let mut stats = Self {
            strategy: strategy.to_string(),
            games: reports.len(),
            solved: 0,
            exhausted: 0,
            gave_up: 0,
            aborted: 0,
            distribution: BTreeMap::new(),
            average_tries: 0.0,
            min_tries: 0,
            max_tries: 0,
            total_time,
        };

        let mut total_tries = 0;
        for report in reports {
            match report.outcome {
                GameOutcome::Solved { tries } => {
                    stats.solved += 1;
                    total_tries += tries;
                    *stats.distribution.entry(tries).or_insert(0) += 1;
                }
                GameOutcome::Exhausted => stats.exhausted += 1,
                GameOutcome::GaveUp => stats.gave_up += 1,
                GameOutcome::Aborted(_) => stats.aborted += 1,
            }
        }

        if stats.solved > 0 {
            stats.average_tries = total_tries as f64 / stats.solved as f64;
            stats.min_tries = stats.distribution.keys().next().copied().unwrap_or(0);
            stats.max_tries = stats.distribution.keys().next_back().copied().unwrap_or(0);
        }

        stats
    }

    /// Fraction of games solved, 0.0 for an empty run
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.solved as f64 / self.games as f64
        }
    }
}

/// Build the games for a run
///
/// Explicit goals win; otherwise `count` goals are drawn from the engine.
pub fn choose_games(engine: &mut GameEngine, explicit: &[Word], count: usize) -> Vec<Game> {
    if explicit.is_empty() {
        (0..count).map(|_| engine.new_game()).collect()
    } else {
        explicit
            .iter()
            .map(|goal| engine.fixed_game(goal.clone()))
            .collect()
    }
}

/// Play every game with a bot, in parallel
///
/// Each game gets its own clone of `strategy` and its own history. Reports
/// come back in game order.
pub fn run_bot(
    config: &RunConfig,
    strategy: &StrategyType,
    words: &[Word],
    games: &[Game],
) -> (Vec<GameReport>, RunStatistics) {
    let start = Instant::now();
    let pb = progress_bar(config, games.len(), strategy.name());

    let reports: Vec<GameReport> = games
        .par_iter()
        .map(|game| {
            let mut bot = strategy.clone();
            let report = play_game(game, &mut bot, words, config.max_tries);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_and_clear();
    let stats = RunStatistics::from_reports(strategy.name(), &reports, start.elapsed());
    (reports, stats)
}

/// Play every game one after another
///
/// Used for strategies that cannot be cloned per game, such as a person at a
/// console. `on_report` sees each game as soon as it ends.
pub fn run_sequential<S, F>(
    config: &RunConfig,
    strategy: &mut S,
    words: &[Word],
    games: &[Game],
    mut on_report: F,
) -> (Vec<GameReport>, RunStatistics)
where
    S: Strategy + ?Sized,
    F: FnMut(&GameReport),
{
    let start = Instant::now();
    let mut reports = Vec::with_capacity(games.len());

    for game in games {
        let report = play_game(game, strategy, words, config.max_tries);
        on_report(&report);
        reports.push(report);
    }

    let stats = RunStatistics::from_reports(strategy.name(), &reports, start.elapsed());
    (reports, stats)
}

fn progress_bar(config: &RunConfig, len: usize, strategy: &str) -> ProgressBar {
    if !config.show_progress {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(err) => log::debug!("falling back to default progress style: {err}"),
    }
    pb.set_message(strategy.to_string());
    pb
}

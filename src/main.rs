//! Guess the Word - CLI
//!
//! Play the game at the console or run guessing bots against many goals.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use guess_the_word::{
    GameError,
    commands::{RunConfig, RunStatistics, choose_games, run_bot, run_sequential},
    core::{WORD_LENGTH, Word},
    corpus::{DEFAULT_CORPUS, load_corpus},
    game::{Game, GameEngine, MAX_TRIES},
    interactive::{ConsoleStrategy, HELP},
    output::{print_game_report, print_interactive_result, print_statistics},
    solver::StrategyType,
};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gtw",
    about = "Guess the Word: play a fixed-length word game or pit bots against it",
    version
)]
struct Cli {
    /// Corpus file, one word per line; goals are drawn from it
    #[arg(short, long, default_value = DEFAULT_CORPUS)]
    corpus: PathBuf,

    /// Word list the bots guess from (defaults to the corpus)
    #[arg(short, long)]
    master: Option<PathBuf>,

    /// Strategies to run: interactive, linear, first, frequency
    #[arg(short, long, value_delimiter = ',', default_value = "interactive")]
    strategy: Vec<String>,

    /// Number of random games when no goals are given
    #[arg(short = 'n', long, default_value_t = 1)]
    games: usize,

    /// Explicit goal words, comma separated
    #[arg(short, long, value_delimiter = ',')]
    goals: Vec<String>,

    /// File of goal words, one per line
    #[arg(long)]
    goals_file: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(long, default_value_t = MAX_TRIES)]
    max_tries: usize,

    /// Seed for goal selection
    #[arg(long)]
    seed: Option<u64>,

    /// Word length
    #[arg(short, long, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Print bot transcripts; repeat for info, debug and trace logs
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// A strategy resolved from the command line
enum Choice {
    Interactive,
    Bot(StrategyType),
}

impl Choice {
    fn parse(name: &str, master: &[Word]) -> Result<Self, GameError> {
        match name {
            "interactive" | "human" => Ok(Self::Interactive),
            bot => StrategyType::from_name(bot, master).map(Self::Bot),
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn load_goals(cli: &Cli) -> Result<Vec<Word>> {
    let mut goals = cli
        .goals
        .iter()
        .map(|text| {
            Word::with_length(text.as_str(), cli.length).map_err(|source| GameError::InvalidWord {
                text: text.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(path) = &cli.goals_file {
        goals.extend(load_corpus(path, Some(cli.length)).context("loading goal words")?);
    }

    Ok(goals)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = load_corpus(&cli.corpus, Some(cli.length)).context("loading corpus")?;
    println!("Loaded corpus: {} words", corpus.len());

    let master = match &cli.master {
        Some(path) => load_corpus(path, Some(cli.length)).context("loading master word list")?,
        None => corpus.clone(),
    };

    // Resolve every strategy before any game starts
    let choices = cli
        .strategy
        .iter()
        .map(|name| Choice::parse(name, &master))
        .collect::<Result<Vec<_>, _>>()?;

    let goals = load_goals(&cli)?;
    let mut engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(corpus, seed),
        None => GameEngine::new(corpus),
    }?;
    let games = choose_games(&mut engine, &goals, cli.games);

    let config = RunConfig {
        max_tries: cli.max_tries,
        show_progress: cli.verbose == 0,
    };

    for choice in &choices {
        let stats = match choice {
            Choice::Interactive => run_interactive(&config, &master, &games, cli.length),
            Choice::Bot(bot) => {
                let (reports, stats) = run_bot(&config, bot, &master, &games);
                if cli.verbose > 0 {
                    reports.iter().for_each(print_game_report);
                }
                stats
            }
        };
        print_statistics(&stats, cli.max_tries);
    }

    Ok(())
}

fn run_interactive(
    config: &RunConfig,
    words: &[Word],
    games: &[Game],
    length: usize,
) -> RunStatistics {
    println!("{HELP}");

    let mut console = ConsoleStrategy::stdio(length);
    let (_, stats) = run_sequential(config, &mut console, words, games, print_interactive_result);
    stats
}

//! Display functions for game and run results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::RunStatistics;
use crate::game::{GameOutcome, GameReport};
use colored::Colorize;

/// One-line verdict for a finished game
#[must_use]
pub fn outcome_summary(report: &GameReport) -> String {
    match &report.outcome {
        GameOutcome::Solved { tries } => format!(
            "solved in {tries} {}",
            if *tries == 1 { "guess" } else { "guesses" }
        ),
        GameOutcome::Exhausted => format!("out of tries after {}", report.tries()),
        GameOutcome::GaveUp => format!("no guess left after {}", report.tries()),
        GameOutcome::Aborted(err) => format!("aborted: {err}"),
    }
}

/// Print the full transcript of one game
pub fn print_game_report(report: &GameReport) {
    println!(
        "\n{} {} ({})",
        "Goal:".bright_cyan().bold(),
        report.goal.text().to_uppercase().bright_yellow().bold(),
        report.strategy
    );

    for (i, record) in report.history.records().iter().enumerate() {
        println!(
            "  {}. {} {}  {}",
            (i + 1).to_string().bright_black(),
            record.guess(),
            record.signature(),
            colored_guess(record)
        );
    }

    let summary = outcome_summary(report);
    if report.is_solved() {
        println!("  {}", summary.green());
    } else {
        println!("  {}", summary.red());
    }
}

/// Close out a game played at the console
pub fn print_interactive_result(report: &GameReport) {
    match &report.outcome {
        GameOutcome::Solved { .. } => println!("\n{}\n", "Success!".bright_green().bold()),
        GameOutcome::GaveUp => println!("\nThe word was {}\n", report.goal.text().bold()),
        _ => println!(
            "\n{}. The word was {}\n",
            outcome_summary(report).red(),
            report.goal.text().bold()
        ),
    }
}

/// Print run statistics for one strategy
pub fn print_statistics(stats: &RunStatistics, max_tries: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RESULTS:".bright_cyan().bold(),
        stats.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("   Games played:     {}", stats.games);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solve_rate() * 100.0).green()
    );
    if stats.exhausted > 0 {
        println!("   Out of tries:     {}", stats.exhausted.to_string().red());
    }
    if stats.gave_up > 0 {
        println!("   Gave up:          {}", stats.gave_up.to_string().red());
    }
    if stats.aborted > 0 {
        println!("   Aborted:          {}", stats.aborted.to_string().red());
    }
    if stats.solved > 0 {
        println!(
            "   Average guesses:  {}",
            format!("{:.2}", stats.average_tries).bright_yellow().bold()
        );
        println!(
            "   Best / worst:     {} / {}",
            stats.min_tries.to_string().green(),
            stats.max_tries.to_string().yellow()
        );
    }
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if stats.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for tries in 1..=max_tries {
        let count = stats.distribution.get(&tries).copied().unwrap_or(0);
        let pct = count as f64 / stats.games as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {tries}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{History, Word};
    use crate::error::GameError;

    fn report(outcome: GameOutcome) -> GameReport {
        GameReport {
            strategy: "first",
            goal: Word::new("three").unwrap(),
            history: History::new(),
            outcome,
        }
    }

    #[test]
    fn summaries() {
        assert_eq!(
            outcome_summary(&report(GameOutcome::Solved { tries: 1 })),
            "solved in 1 guess"
        );
        assert_eq!(
            outcome_summary(&report(GameOutcome::Solved { tries: 4 })),
            "solved in 4 guesses"
        );
        assert_eq!(
            outcome_summary(&report(GameOutcome::Exhausted)),
            "out of tries after 0"
        );
        assert_eq!(
            outcome_summary(&report(GameOutcome::Aborted(GameError::LengthMismatch {
                expected: 5,
                actual: 4
            }))),
            "aborted: guess has 4 letters but the goal has 5"
        );
    }
}

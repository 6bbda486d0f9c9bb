//! Display functions for session and command results

use super::formatters::{create_progress_bar, format_ranked, format_word_list, sample_words};
use crate::commands::{SimulationResult, SuggestResult};
use crate::core::{ValidationError, Word};
use crate::solver::{RoundOutcome, RoundReport, Scored};
use colored::Colorize;
use log::warn;
use rand::Rng;

/// Print an informational notice
pub fn print_info(message: &str) {
    println!("{} {message}", "INFO:".magenta().bold());
}

/// Print an error notice
pub fn print_error(message: &str) {
    println!("{} {message}", "ERROR:".red().bold());
}

/// Print the banner and input help for the line-based mode
pub fn print_welcome(total_words: usize, bank_words: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDLE ASSISTANT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nTracking {} possible answers, suggesting from {} words.",
        total_words.to_string().bright_yellow(),
        bank_words.to_string().bright_yellow()
    );
    println!("\nEnter the clues of each guess, separated by commas:");
    println!("  - {} green letters in place, e.g. {}", "UPPERCASE".green(), "--A-E".green());
    println!("  - {} yellow letters in place, e.g. {}", "lowercase".yellow(), "r----".yellow());
    println!("  - gray letters as one run, e.g. {}", "cnt".bright_black());
    println!("  - prefix with {} to force a positional reading, e.g. {}", "!".bold(), "!abcde".yellow());
    println!("\nCommands: {} new game, {} exit\n", "1".bold(), "2".bold());
}

/// Print opening suggestions for a fresh game
pub fn print_opening(opening: &[Scored], limit: usize) {
    println!("{}", "Suggested first words:".yellow().bold());
    println!("{}\n", format_ranked(opening, limit).yellow());
}

/// Report a clue that was rejected and skipped
pub fn print_rejected(token: &str, error: &ValidationError) {
    warn!("rejected clue {token:?}: {error}");
    print_error(&format!("'{token}' ignored: {error}"));
}

/// Print the announcement of a new game
pub fn print_new_game(opening: &[Scored], limit: usize) {
    println!("{}", "New game started!".red().bold());
    print_opening(opening, limit);
}

fn print_pool<R: Rng + ?Sized>(survivors: &[&Word], limit: usize, rng: &mut R) {
    let shown = sample_words(survivors, limit, rng);
    println!(
        "{} {}",
        "Possible words".green().bold(),
        format_word_list(&shown, survivors.len()).green()
    );
}

fn print_report_pool<R: Rng + ?Sized>(report: &RoundReport, limit: usize, rng: &mut R) {
    println!(
        "{}",
        format!("Reduced pool by {:.2}%", report.reduction_percent).bright_cyan()
    );
    print_pool(&report.survivors, limit, rng);
}

/// Print what one round of clues did to the game
pub fn print_outcome<R: Rng + ?Sized>(outcome: &RoundOutcome, limit: usize, rng: &mut R) {
    match outcome {
        RoundOutcome::Narrowed(report) => {
            print_report_pool(report, limit, rng);
            println!("{}", "Words that might be good guesses:".yellow().bold());
            println!("{}\n", format_ranked(&report.suggestions, limit).yellow());
        }
        RoundOutcome::Solved(report) => {
            print_report_pool(report, limit, rng);
            println!("\n{}", "Wordle has been solved!".bright_green().bold());
            print_new_game(&report.suggestions, limit);
        }
        RoundOutcome::Exhausted { before } => {
            print_info(&format!(
                "No more valid words remain out of {before}. Check the clues you entered."
            ));
            print_info("Restarting game...");
            println!();
        }
    }
}

/// Print the result of a one-shot suggestion run
pub fn print_suggest_result<R: Rng + ?Sized>(result: &SuggestResult, limit: usize, rng: &mut R) {
    for (token, error) in &result.rejected {
        print_rejected(token, error);
    }

    println!(
        "{}",
        format!(
            "Reduced pool by {:.2}% ({} → {})",
            result.reduction_percent,
            result.before,
            result.survivors.len()
        )
        .bright_cyan()
    );
    if result.survivors.is_empty() {
        print_info("No words match these clues.");
        return;
    }

    print_pool(&result.survivors, limit, rng);
    println!("{}", "Words that might be good guesses:".yellow().bold());
    println!("{}", format_ranked(&result.suggestions, limit).yellow());
}

/// Print the statistics of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!("   Failed:           {}", result.failed.to_string().red());
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<_> = result.distribution.iter().collect();
    rounds.sort_unstable();
    for (round, &count) in rounds {
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {round:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if let Some(hardest) = &result.hardest {
        println!(
            "\n🧩 {} {} in {} rounds",
            "Hardest:".bright_cyan().bold(),
            hardest.target.to_uppercase().bright_yellow(),
            hardest.rounds()
        );
        for row in &hardest.rows {
            println!("   {row}");
        }
    }

    if !result.failures.is_empty() {
        let shown: Vec<&str> = result.failures.iter().take(10).map(String::as_str).collect();
        let more = if result.failures.len() > shown.len() { ", ..." } else { "" };
        println!(
            "\n❌ {} {}{more}",
            "Unsolved:".red().bold(),
            shown.join(", ")
        );
    }
}

//! Terminal output formatting
//!
//! Display utilities for command results.

use colored::Colorize;

use crate::commands::{CheckReport, DocStatus, GenerateOutcome};

/// Print generated puzzles, one block per day
pub fn print_generated(outcomes: &[GenerateOutcome]) {
    for outcome in outcomes {
        let puzzle = &outcome.puzzle;
        let letters: String = puzzle
            .letters
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();

        println!("\n{}", "─".repeat(60).cyan());
        println!("Puzzle for {}", outcome.date.bright_yellow().bold());
        println!("{}", "─".repeat(60).cyan());
        println!(
            "Letters:  {}  (required {})",
            letters.bold(),
            puzzle
                .required
                .to_ascii_uppercase()
                .to_string()
                .bright_green()
                .bold()
        );
        println!("Pangram:  {}", puzzle.pangram.to_uppercase());
        println!("Words:    {}", puzzle.words.len());
        println!("Target:   {}", puzzle.target_score);
        if let Some(path) = &outcome.written {
            println!("Written:  {}", path.display());
        }
    }
    println!();
}

/// Print one day's check results across all games
pub fn print_check_reports(reports: &[CheckReport]) {
    if let Some(first) = reports.first() {
        println!("\nChecking documents for {}", first.slug.bright_yellow().bold());
    }

    for report in reports {
        let (badge, detail) = match &report.status {
            DocStatus::Ok(detail) => ("ok     ".green().bold(), detail.clone()),
            DocStatus::Missing => ("missing".yellow().bold(), String::new()),
            DocStatus::Invalid(reason) => ("invalid".red().bold(), reason.clone()),
        };
        println!("  {:<12} {badge} {}", report.game, detail.dimmed());
    }

    let ok = reports.iter().filter(|r| r.is_ok()).count();
    println!("\n{ok}/{} documents playable", reports.len());
}

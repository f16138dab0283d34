//! Lunamini - content tools for the daily word games
//!
//! Generates bee puzzles from date-derived seeds and validates one day's
//! curated documents across all four games.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lunamini::{
    commands::{DocStatus, GenerateRequest, run_check, run_generate},
    core::{DateProvider, SystemDates, parse_date},
    generator::{Generator, GeneratorConfig},
    output::{print_check_reports, print_generated},
    wordlists::{WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "lunamini",
    about = "Generate and validate daily word-puzzle content",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Puzzle date (YYYY-MM-DD, default: today)
    #[arg(short, long, global = true)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bee puzzles from date-derived seeds
    Generate {
        /// Consecutive days to generate, starting at the date
        #[arg(short = 'n', long, default_value = "1")]
        days: u64,

        /// Seed salt, for regenerating a day with a different puzzle
        #[arg(short, long)]
        salt: Option<String>,

        /// Dictionary file, one word per line (default: embedded list)
        #[arg(short = 'w', long)]
        wordlist: Option<PathBuf>,

        /// Reject letter sets with fewer valid words than this
        #[arg(long, default_value = "10")]
        min_words: usize,

        /// Reject letter sets with more valid words than this
        #[arg(long, default_value = "250")]
        max_words: usize,

        /// Write documents under this content root
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate one day's curated documents
    Check {
        /// Content root holding per-game document directories
        #[arg(short, long, default_value = "content")]
        puzzles: PathBuf,
    },
}

fn effective_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => {
            parse_date(s).with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
        }
        None => Ok(SystemDates.today()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let date = effective_date(cli.date.as_deref())?;

    match cli.command {
        Commands::Generate {
            days,
            salt,
            wordlist,
            min_words,
            max_words,
            out_dir,
        } => {
            let generator = match wordlist {
                Some(path) => {
                    let words = load_from_file(&path)
                        .with_context(|| format!("cannot read wordlist {}", path.display()))?;
                    Generator::new(words)
                }
                None => Generator::new(WORDS.iter().copied()),
            };

            let request = GenerateRequest {
                start: date,
                days,
                salt,
                config: GeneratorConfig {
                    min_words,
                    max_words,
                    ..GeneratorConfig::default()
                },
                out_dir,
            };

            let outcomes = run_generate(&generator, &request)?;
            print_generated(&outcomes);
        }

        Commands::Check { puzzles } => {
            let reports = run_check(&puzzles, date);
            print_check_reports(&reports);
            if reports
                .iter()
                .any(|r| matches!(r.status, DocStatus::Invalid(_)))
            {
                bail!("invalid documents found");
            }
        }
    }

    Ok(())
}

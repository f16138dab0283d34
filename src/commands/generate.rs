//! Puzzle generation command
//!
//! Produces one bee puzzle per day from a seed derived from the date, and
//! optionally writes each one as a curated document under
//! `<out>/hexicon/<date>.json`.

use std::fs;
use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::date_key;
use crate::errors::{PuzzleError, Result};
use crate::generator::{GeneratedPuzzle, Generator, GeneratorConfig};
use crate::puzzles::games;

/// What to generate and where to put it
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// First (or only) date to generate.
    pub start: NaiveDate,
    /// Consecutive days starting at `start`.
    pub days: u64,
    /// Optional seed salt, for regenerating a day with a different puzzle.
    pub salt: Option<String>,
    pub config: GeneratorConfig,
    /// When set, each puzzle is written as a document under this root.
    pub out_dir: Option<PathBuf>,
}

/// One generated day
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub date: String,
    pub puzzle: GeneratedPuzzle,
    /// Path of the written document, when an output root was given.
    pub written: Option<PathBuf>,
}

/// Generate puzzles for a run of days
///
/// Shows a progress bar for multi-day runs. Fails on the first day that
/// exhausts its attempt budget; days already written stay on disk.
///
/// # Errors
/// [`PuzzleError::GenerationExhausted`] from the generator, or I/O errors
/// while writing documents.
pub fn run_generate(
    generator: &Generator,
    request: &GenerateRequest,
) -> Result<Vec<GenerateOutcome>> {
    let pb = if request.days > 1 {
        let pb = ProgressBar::new(request.days);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        Some(pb)
    } else {
        None
    };

    let mut outcomes = Vec::with_capacity(usize::try_from(request.days).unwrap_or_default());
    for offset in 0..request.days {
        let date = request
            .start
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| PuzzleError::content("date out of range"))?;
        let slug = date_key(date);

        if let Some(pb) = &pb {
            pb.set_message(slug.clone());
        }

        let puzzle = generator.generate_for_date(date, request.salt.as_deref(), &request.config)?;

        let written = match &request.out_dir {
            Some(root) => {
                let dir = root.join(games::HEXICON);
                fs::create_dir_all(&dir)?;
                let path = dir.join(format!("{slug}.json"));
                let doc = puzzle.clone().into_doc(&slug);
                fs::write(&path, serde_json::to_string_pretty(&doc)?)?;
                Some(path)
            }
            None => None,
        };

        outcomes.push(GenerateOutcome {
            date: slug,
            puzzle,
            written,
        });

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    Ok(outcomes)
}

//! Loading puzzle documents by date or slug
//!
//! The engines consume a [`PuzzleSource`]; the production implementation
//! reads JSON files from a puzzles directory laid out as
//! `<root>/<game>/<YYYY-MM-DD>.json` (or `<slug>.json` for specials).
//! A missing or unparseable document is "not found", never a crash; the
//! session layer decides whether that is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use super::docs::{CryptiniDoc, HexiconDoc, LetterheadDoc, MiniDoc};
use crate::core::date_key;

/// Directory names, also used as snapshot key prefixes
pub mod games {
    pub const HEXICON: &str = "hexicon";
    pub const MINI: &str = "lunamini";
    pub const LETTERHEAD: &str = "letterhead";
    pub const CRYPTINI: &str = "cryptini";
}

/// Read-only source of curated puzzle documents
pub trait PuzzleSource {
    /// Bee-game document for a date
    fn load_hexicon(&self, date: NaiveDate) -> Option<HexiconDoc>;

    /// Mini-crossword document for a date
    fn load_mini(&self, date: NaiveDate) -> Option<MiniDoc>;

    /// Wordle-style document for a date
    fn load_letterhead(&self, date: NaiveDate) -> Option<LetterheadDoc>;

    /// Wordle-style document for a named special slug
    fn load_letterhead_special(&self, slug: &str) -> Option<LetterheadDoc>;

    /// Cryptic-clue document for a date
    fn load_cryptini(&self, date: NaiveDate) -> Option<CryptiniDoc>;

    /// The accepted-guess word list for the Wordle-style game
    fn allowed_guesses(&self) -> Option<Vec<String>>;
}

/// Filesystem-backed puzzle source
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at a puzzles directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the document for a game and date-or-slug key
    #[must_use]
    pub fn path_for(&self, game: &str, slug: &str) -> PathBuf {
        self.root.join(game).join(format!("{slug}.json"))
    }

    fn read_doc<T: DeserializeOwned>(&self, game: &str, slug: &str) -> Option<T> {
        read_json(&self.path_for(game, slug))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

impl PuzzleSource for DirSource {
    fn load_hexicon(&self, date: NaiveDate) -> Option<HexiconDoc> {
        self.read_doc(games::HEXICON, &date_key(date))
    }

    fn load_mini(&self, date: NaiveDate) -> Option<MiniDoc> {
        self.read_doc(games::MINI, &date_key(date))
    }

    fn load_letterhead(&self, date: NaiveDate) -> Option<LetterheadDoc> {
        self.read_doc(games::LETTERHEAD, &date_key(date))
    }

    fn load_letterhead_special(&self, slug: &str) -> Option<LetterheadDoc> {
        self.read_doc(games::LETTERHEAD, slug)
    }

    fn load_cryptini(&self, date: NaiveDate) -> Option<CryptiniDoc> {
        self.read_doc(games::CRYPTINI, &date_key(date))
    }

    fn allowed_guesses(&self) -> Option<Vec<String>> {
        let path = self.root.join(games::LETTERHEAD).join("allowed.txt");
        let text = fs::read_to_string(path).ok()?;
        Some(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

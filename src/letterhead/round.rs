//! One round of the daily guessing game
//!
//! Owns the 6x5 tile grid, the cursor, the per-key feedback ladder, and
//! the snapshot plumbing. Restores replay saved guesses through the same
//! scoring path the player used, so a loaded round is indistinguishable
//! from one played live.

use std::fmt;

use chrono::Utc;
use rustc_hash::FxHashSet;

use super::tile::{TileState, WORD_LEN, score_guess};
use crate::core::{DateProvider, date_key, normalize_upper};
use crate::errors::{PuzzleError, Result};
use crate::puzzles::{LetterheadDoc, PuzzleSource, games};
use crate::store::{LetterheadSave, SnapshotStore, key_for};

/// Guess rows available before the round is lost
pub const MAX_ROWS: usize = 6;

/// One cell of the guess grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub ch: Option<char>,
    pub state: TileState,
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Won,
    Lost,
}

/// Why a submit attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    RowNotFull,
    NotInWordList,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowNotFull => write!(f, "Not enough letters."),
            Self::NotInWordList => write!(f, "Not in word list."),
        }
    }
}

/// Playable round: answer, tile grid, cursor, and keyboard feedback
#[derive(Debug, Clone)]
pub struct Round {
    slug: String,
    answer: String,
    allowed: Option<FxHashSet<String>>,
    rows: [[Tile; WORD_LEN]; MAX_ROWS],
    row: usize,
    col: usize,
    state: RoundState,
    key_states: [TileState; 26],
    guesses: Vec<String>,
}

impl Round {
    /// Build a round from an answer and an optional allowed-guess list
    ///
    /// The answer is normalized to uppercase letters. When `allowed` is
    /// `None` any full row may be submitted; when present the list is
    /// normalized the same way and the answer is always included.
    ///
    /// # Errors
    /// [`PuzzleError::ContentIntegrity`] when the normalized answer is not
    /// exactly [`WORD_LEN`] letters.
    pub fn new(answer: &str, allowed: Option<&[String]>, slug: &str) -> Result<Self> {
        let answer = normalize_upper(answer);
        if answer.len() != WORD_LEN {
            return Err(PuzzleError::content(format!(
                "answer must be {WORD_LEN} letters, got {}",
                answer.len()
            )));
        }

        let allowed = allowed.map(|words| {
            let mut set: FxHashSet<String> = words
                .iter()
                .map(|w| normalize_upper(w))
                .filter(|w| w.len() == WORD_LEN)
                .collect();
            set.insert(answer.clone());
            set
        });

        Ok(Self {
            slug: slug.to_string(),
            answer,
            allowed,
            rows: [[Tile::default(); WORD_LEN]; MAX_ROWS],
            row: 0,
            col: 0,
            state: RoundState::Playing,
            key_states: [TileState::Empty; 26],
            guesses: Vec::new(),
        })
    }

    /// Load a round for today, or for a special puzzle by slug
    ///
    /// # Errors
    /// [`PuzzleError::NotFound`] when no document exists;
    /// [`PuzzleError::ContentIntegrity`] when the source has no
    /// allowed-guess list, so a loaded round never accepts arbitrary
    /// letters; content errors from [`Round::new`].
    pub fn load(
        source: &dyn PuzzleSource,
        dates: &dyn DateProvider,
        store: &dyn SnapshotStore,
        special: Option<&str>,
    ) -> Result<Self> {
        let (doc, slug) = match special {
            Some(slug) => (source.load_letterhead_special(slug), slug.to_string()),
            None => {
                let today = dates.today();
                (source.load_letterhead(today), date_key(today))
            }
        };
        let doc: LetterheadDoc = doc.ok_or_else(|| PuzzleError::NotFound(slug.clone()))?;

        let allowed = source
            .allowed_guesses()
            .ok_or_else(|| PuzzleError::content("allowed-guess list is missing"))?;
        let mut round = Self::new(&doc.answer, Some(&allowed), &slug)?;
        round.restore(store);
        Ok(round)
    }

    // --- Read surface ---

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn rows(&self) -> &[[Tile; WORD_LEN]; MAX_ROWS] {
        &self.rows
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn active_row(&self) -> usize {
        self.row
    }

    /// Feedback shown on one keyboard key
    #[must_use]
    pub fn key_state(&self, ch: char) -> TileState {
        let ch = ch.to_ascii_uppercase();
        if ch.is_ascii_uppercase() {
            self.key_states[(ch as u8 - b'A') as usize]
        } else {
            TileState::Empty
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == RoundState::Playing && self.col == WORD_LEN
    }

    // --- Input ---

    /// Append a letter to the active row
    pub fn type_char(&mut self, ch: char) {
        if self.state != RoundState::Playing || self.col >= WORD_LEN || !ch.is_ascii_alphabetic() {
            return;
        }
        self.rows[self.row][self.col] = Tile {
            ch: Some(ch.to_ascii_uppercase()),
            state: TileState::Pending,
        };
        self.col += 1;
    }

    /// Remove the last letter from the active row
    pub fn backspace(&mut self) {
        if self.state != RoundState::Playing || self.col == 0 {
            return;
        }
        self.col -= 1;
        self.rows[self.row][self.col] = Tile::default();
    }

    /// Score the active row and advance the round
    ///
    /// The row stays editable on rejection. On success the tiles and
    /// keyboard pick up their feedback states and the cursor moves to the
    /// next row (or the round ends).
    ///
    /// # Errors
    /// [`GuessRejection::RowNotFull`] when fewer than [`WORD_LEN`] letters
    /// are typed; [`GuessRejection::NotInWordList`] when an allowed list is
    /// loaded and the word is not on it.
    pub fn submit(&mut self) -> std::result::Result<[TileState; WORD_LEN], GuessRejection> {
        if self.state != RoundState::Playing || self.col < WORD_LEN {
            return Err(GuessRejection::RowNotFull);
        }

        let word: String = self.rows[self.row]
            .iter()
            .filter_map(|t| t.ch)
            .collect();
        if let Some(set) = &self.allowed
            && !set.contains(&word)
        {
            return Err(GuessRejection::NotInWordList);
        }

        Ok(self.apply_guess(&word))
    }

    /// Score a known-good guess into the current row
    ///
    /// Shared by [`Round::submit`] and save replay; callers have already
    /// validated the word.
    fn apply_guess(&mut self, word: &str) -> [TileState; WORD_LEN] {
        let states = score_guess(word, &self.answer);

        for (i, (tile, state)) in self.rows[self.row].iter_mut().zip(states).enumerate() {
            let ch = word.as_bytes()[i].to_ascii_uppercase() as char;
            *tile = Tile {
                ch: Some(ch),
                state,
            };
            let key = &mut self.key_states[(ch as u8 - b'A') as usize];
            if state > *key {
                *key = state;
            }
        }

        self.guesses.push(word.to_string());

        if word == self.answer {
            self.state = RoundState::Won;
        } else if self.row + 1 == MAX_ROWS {
            self.state = RoundState::Lost;
        } else {
            self.row += 1;
        }
        self.col = 0;

        states
    }

    // --- Persistence ---

    fn store_key(&self) -> String {
        key_for(games::LETTERHEAD, &self.slug)
    }

    /// Serializable capture of the submitted guesses
    #[must_use]
    pub fn snapshot(&self) -> LetterheadSave {
        LetterheadSave {
            date: self.slug.clone(),
            guesses: self.guesses.clone(),
            letterhead: self.answer.clone(),
            saved_at: Utc::now(),
        }
    }

    /// Write the current snapshot to the store
    pub fn save(&self, store: &mut dyn SnapshotStore) {
        if let Ok(json) = serde_json::to_string(&self.snapshot()) {
            store.set(&self.store_key(), &json);
        }
    }

    /// Replay a saved round; a snapshot for a different answer is ignored
    pub fn restore(&mut self, store: &dyn SnapshotStore) {
        let Some(raw) = store.get(&self.store_key()) else {
            return;
        };
        let Ok(save) = serde_json::from_str::<LetterheadSave>(&raw) else {
            return;
        };
        if !save.letterhead.eq_ignore_ascii_case(&self.answer) {
            return;
        }

        for guess in &save.guesses {
            if self.state != RoundState::Playing {
                break;
            }
            let guess = normalize_upper(guess);
            if guess.len() == WORD_LEN {
                self.apply_guess(&guess);
            }
        }
    }

    /// Clear the stored snapshot and start the round over
    pub fn reset(&mut self, store: &mut dyn SnapshotStore) {
        store.remove(&self.store_key());
        self.rows = [[Tile::default(); WORD_LEN]; MAX_ROWS];
        self.row = 0;
        self.col = 0;
        self.state = RoundState::Playing;
        self.key_states = [TileState::Empty; 26];
        self.guesses.clear();
    }
}

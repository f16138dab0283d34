//! Mini-crossword session: document in, playable grid out
//!
//! Thin stateful wrapper over [`Grid`] that owns the day's metadata and
//! clue lists, and talks to the snapshot store.

use chrono::{NaiveDate, Utc};

use super::grid::{Clue, Grid, SIZE};
use super::navigator::Navigator;
use crate::core::{DateProvider, date_key};
use crate::errors::{PuzzleError, Result};
use crate::puzzles::{MiniDoc, PuzzleSource, games};
use crate::store::{MiniSave, SnapshotStore, key_for};

/// One mini-crossword session for one puzzle day
#[derive(Debug, Clone)]
pub struct MiniSession {
    slug: String,
    title: String,
    author: String,
    date: String,
    grid: Grid,
    across: Vec<Clue>,
    down: Vec<Clue>,
}

impl MiniSession {
    /// Hydrate from a curated document
    ///
    /// # Errors
    /// [`PuzzleError::ContentIntegrity`] when the grid is not 5x5, a cell
    /// is neither a letter nor `#`, a clue starts on a non-entry cell, or a
    /// declared answer disagrees with the grid.
    pub fn hydrate(doc: &MiniDoc, date: NaiveDate) -> Result<Self> {
        if doc.rows.len() != SIZE {
            return Err(PuzzleError::content(format!(
                "rows must be {SIZE} strings of length {SIZE}"
            )));
        }

        let grid = Grid::from_rows(&doc.rows, doc.highlights.as_deref())?;
        let (across, down) = grid.build_clues(&doc.clues)?;

        Ok(Self {
            slug: date_key(date),
            title: doc.title.clone(),
            author: doc.author.clone(),
            date: if doc.date.is_empty() {
                date_key(date)
            } else {
                doc.date.clone()
            },
            grid,
            across,
            down,
        })
    }

    /// Load today's puzzle and restore any saved entries
    ///
    /// # Errors
    /// [`PuzzleError::NotFound`] when no document exists for today;
    /// content-integrity errors from [`MiniSession::hydrate`].
    pub fn load(
        source: &dyn PuzzleSource,
        dates: &dyn DateProvider,
        store: &dyn SnapshotStore,
    ) -> Result<Self> {
        let today = dates.today();
        let doc = source
            .load_mini(today)
            .ok_or_else(|| PuzzleError::NotFound(date_key(today)))?;
        let mut session = Self::hydrate(&doc, today)?;
        session.restore(store);
        Ok(session)
    }

    // --- Read surface ---

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn across(&self) -> &[Clue] {
        &self.across
    }

    #[must_use]
    pub fn down(&self) -> &[Clue] {
        &self.down
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn solved(&self) -> bool {
        self.grid.solved()
    }

    /// Fresh navigation index for the grid's block layout
    #[must_use]
    pub fn navigator(&self) -> Navigator {
        Navigator::for_grid(&self.grid)
    }

    // --- Edits ---

    /// Write or clear one cell's entry (no-op on blocks)
    pub fn set_entry(&mut self, idx: usize, ch: Option<char>) {
        self.grid.set_entry(idx, ch);
    }

    /// Mark every correct cell in the grid
    pub fn check_all(&mut self) {
        self.grid.check_all();
    }

    /// Mark correct cells along one clue's span
    pub fn check_clue(&mut self, clue: &Clue) {
        self.grid.check_clue(clue.row, clue.col, clue.direction);
    }

    /// Clear all check marks
    pub fn clear_marks(&mut self) {
        self.grid.clear_marks();
    }

    // --- Persistence ---

    fn store_key(&self) -> String {
        key_for(games::MINI, &self.slug)
    }

    /// Serializable capture of the player's entries
    #[must_use]
    pub fn snapshot(&self) -> MiniSave {
        MiniSave {
            date: self.slug.clone(),
            entries: self.grid.entries(),
            solved: self.grid.solved(),
            saved_at: Utc::now(),
        }
    }

    /// Write the current snapshot to the store
    pub fn save(&self, store: &mut dyn SnapshotStore) {
        if let Ok(json) = serde_json::to_string(&self.snapshot()) {
            store.set(&self.store_key(), &json);
        }
    }

    /// Restore saved entries; a snapshot of the wrong shape is ignored
    pub fn restore(&mut self, store: &dyn SnapshotStore) {
        let Some(raw) = store.get(&self.store_key()) else {
            return;
        };
        let Ok(save) = serde_json::from_str::<MiniSave>(&raw) else {
            return;
        };
        if save.entries.len() == self.grid.cell_count() {
            self.grid.apply_entries(&save.entries);
        }
    }

    /// Clear the stored snapshot and all entries and marks
    pub fn reset(&mut self, store: &mut dyn SnapshotStore) {
        store.remove(&self.store_key());
        let entries = vec![None; self.grid.cell_count()];
        self.grid.apply_entries(&entries);
        self.grid.clear_marks();
    }
}

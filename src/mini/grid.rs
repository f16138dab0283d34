//! Crossword grid construction, numbering, and clue indexing
//!
//! Cells are plain value structs in a flat row-major `Vec`; all mutation
//! happens by index. The builder is size-parametric even though the daily
//! puzzle is fixed at 5x5.

use crate::core::normalize_upper;
use crate::errors::{PuzzleError, Result};
use crate::puzzles::{ClueDecl, MiniClues};

/// Side length of the daily mini
pub const SIZE: usize = 5;

/// Cell count of the daily mini
pub const CELLS: usize = SIZE * SIZE;

/// Reading direction of a clue span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

/// Result of a "check" action on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMark {
    #[default]
    None,
    Correct,
}

/// One grid cell
///
/// Blocks never carry a solution, a number, or an entry.
#[derive(Debug, Clone)]
pub struct Cell {
    pub is_block: bool,
    pub is_highlighted: bool,
    pub solution: Option<char>,
    pub number: Option<u32>,
    pub entry: Option<char>,
    pub mark: CheckMark,
}

impl Cell {
    fn block() -> Self {
        Self {
            is_block: true,
            is_highlighted: false,
            solution: None,
            number: None,
            entry: None,
            mark: CheckMark::None,
        }
    }

    fn letter(solution: char, is_highlighted: bool) -> Self {
        Self {
            is_block: false,
            is_highlighted,
            solution: Some(solution),
            number: None,
            entry: None,
            mark: CheckMark::None,
        }
    }

    /// A block is trivially correct; a letter cell is correct when its
    /// entry matches its solution
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_block || (self.entry.is_some() && self.entry == self.solution)
    }
}

/// An indexed clue with its derived span length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub number: u32,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub text: String,
    pub length: usize,
}

/// A playable crossword grid
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row strings and an optional highlight mask
    ///
    /// `#` marks a block; every other character must be a letter. The
    /// highlight mask, when present, must have the same shape and uses `*`
    /// for highlighted cells. Numbering is assigned immediately.
    ///
    /// # Errors
    /// [`PuzzleError::ContentIntegrity`] on any shape or character problem.
    pub fn from_rows(rows: &[String], highlights: Option<&[String]>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(PuzzleError::content("grid has no rows"));
        }
        if rows.iter().any(|r| r.chars().count() != size) {
            return Err(PuzzleError::content(format!(
                "rows must be {size} strings of length {size}"
            )));
        }

        let mask = match highlights {
            Some(mask) => {
                if mask.len() != size || mask.iter().any(|r| r.chars().count() != size) {
                    return Err(PuzzleError::content(
                        "highlight mask must match the grid shape",
                    ));
                }
                Some(mask)
            }
            None => None,
        };

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                if ch == '#' {
                    cells.push(Cell::block());
                    continue;
                }
                if !ch.is_ascii_alphabetic() {
                    return Err(PuzzleError::content(format!(
                        "rows[{r}][{c}] must be A-Z or '#', got {ch:?}"
                    )));
                }
                let highlighted = mask
                    .and_then(|m| m[r].chars().nth(c))
                    .is_some_and(|m| m == '*');
                cells.push(Cell::letter(ch.to_ascii_uppercase(), highlighted));
            }
        }

        let mut grid = Self { size, cells };
        grid.auto_number();
        Ok(grid)
    }

    /// Assign entry numbers in row-major scan order
    ///
    /// A cell starts an entry when it opens an across run (left edge or
    /// block to the left) or a down run (top edge or block above). One
    /// shared sequence covers both directions, crossword style. Rebuilding
    /// from the same rows always yields the same assignment.
    fn auto_number(&mut self) {
        let mut next = 0;
        for i in 0..self.cells.len() {
            if self.cells[i].is_block {
                continue;
            }
            let (r, c) = self.coords(i);
            let starts_across = c == 0 || self.cells[i - 1].is_block;
            let starts_down = r == 0 || self.cells[i - self.size].is_block;
            if starts_across || starts_down {
                next += 1;
                self.cells[i].number = Some(next);
            }
        }
    }

    // --- Geometry ---

    /// Side length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total cell count
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of (row, col)
    #[inline]
    #[must_use]
    pub const fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// (row, col) of a row-major index
    #[inline]
    #[must_use]
    pub const fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.size, idx % self.size)
    }

    // --- Cell access ---

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// # Panics
    /// When `idx` is outside the grid.
    #[must_use]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// # Panics
    /// When `idx` is outside the grid.
    #[must_use]
    pub fn is_block(&self, idx: usize) -> bool {
        self.cells[idx].is_block
    }

    /// # Panics
    /// When `idx` is outside the grid.
    #[must_use]
    pub fn entry(&self, idx: usize) -> Option<char> {
        self.cells[idx].entry
    }

    /// # Panics
    /// When `idx` is outside the grid.
    #[must_use]
    pub fn solution(&self, idx: usize) -> Option<char> {
        self.cells[idx].solution
    }

    /// Write or clear a cell's entry; block cells ignore writes
    ///
    /// Editing a cell always clears its check mark.
    ///
    /// # Panics
    /// When `idx` is outside the grid.
    pub fn set_entry(&mut self, idx: usize, ch: Option<char>) {
        let cell = &mut self.cells[idx];
        if cell.is_block {
            return;
        }
        cell.entry = ch.map(|c| c.to_ascii_uppercase());
        cell.mark = CheckMark::None;
    }

    /// Player entries in cell order, for snapshots
    #[must_use]
    pub fn entries(&self) -> Vec<Option<char>> {
        self.cells.iter().map(|c| c.entry).collect()
    }

    /// Replace entries from a snapshot of the same shape; blocks stay empty
    pub fn apply_entries(&mut self, entries: &[Option<char>]) {
        if entries.len() != self.cells.len() {
            return;
        }
        for (cell, entry) in self.cells.iter_mut().zip(entries) {
            if !cell.is_block {
                cell.entry = *entry;
            }
        }
    }

    // --- Clue spans ---

    /// Number already assigned at (row, col)
    ///
    /// # Errors
    /// [`PuzzleError::ContentIntegrity`] when (row, col) lies outside the
    /// grid or the cell never received a number, i.e. it is not a genuine
    /// entry start.
    pub fn number_at(&self, row: usize, col: usize) -> Result<u32> {
        if row >= self.size || col >= self.size {
            return Err(PuzzleError::content(format!(
                "({row},{col}) is outside the grid"
            )));
        }
        self.cells[self.idx(row, col)]
            .number
            .ok_or_else(|| PuzzleError::content(format!("({row},{col}) is not a clue start")))
    }

    /// Cell indices of the run starting at (row, col)
    #[must_use]
    pub fn span_indices(&self, row: usize, col: usize, direction: Direction) -> Vec<usize> {
        let mut indices = Vec::new();
        match direction {
            Direction::Across => {
                for c in col..self.size {
                    let i = self.idx(row, c);
                    if self.cells[i].is_block {
                        break;
                    }
                    indices.push(i);
                }
            }
            Direction::Down => {
                for r in row..self.size {
                    let i = self.idx(r, col);
                    if self.cells[i].is_block {
                        break;
                    }
                    indices.push(i);
                }
            }
        }
        indices
    }

    /// Solution letters read along a span
    #[must_use]
    pub fn read_span(&self, row: usize, col: usize, direction: Direction) -> String {
        self.span_indices(row, col, direction)
            .into_iter()
            .filter_map(|i| self.cells[i].solution)
            .collect()
    }

    /// Resolve declared clues into indexed [`Clue`]s, sorted by number
    ///
    /// Each clue's start must be a numbered cell, and any declared answer
    /// must read, letter by letter, exactly as the grid solution along the
    /// span.
    ///
    /// # Errors
    /// [`PuzzleError::ContentIntegrity`] on a non-entry start or an answer
    /// mismatch.
    pub fn build_clues(&self, declared: &MiniClues) -> Result<(Vec<Clue>, Vec<Clue>)> {
        let mut across = self.resolve_clues(&declared.across, Direction::Across)?;
        let mut down = self.resolve_clues(&declared.down, Direction::Down)?;
        across.sort_unstable_by_key(|c| c.number);
        down.sort_unstable_by_key(|c| c.number);
        Ok((across, down))
    }

    fn resolve_clues(&self, declared: &[ClueDecl], direction: Direction) -> Result<Vec<Clue>> {
        let mut clues = Vec::with_capacity(declared.len());
        for decl in declared {
            if decl.row >= self.size || decl.col >= self.size {
                return Err(PuzzleError::content(format!(
                    "clue at ({},{}) lies outside the grid",
                    decl.row, decl.col
                )));
            }
            if self.cells[self.idx(decl.row, decl.col)].is_block {
                return Err(PuzzleError::content(format!(
                    "clue start ({},{}) is a block",
                    decl.row, decl.col
                )));
            }

            let number = self.number_at(decl.row, decl.col)?;
            let length = self.span_indices(decl.row, decl.col, direction).len();

            if let Some(answer) = decl.answer.as_deref() {
                let expected = normalize_upper(answer);
                let from_grid = self.read_span(decl.row, decl.col, direction);
                if expected != from_grid {
                    return Err(PuzzleError::content(format!(
                        "clue {number} answer mismatch: declared '{expected}', grid '{from_grid}'"
                    )));
                }
            }

            clues.push(Clue {
                number,
                row: decl.row,
                col: decl.col,
                direction,
                text: decl.clue.clone(),
                length,
            });
        }
        Ok(clues)
    }

    // --- Checking ---

    /// Mark every correct non-block cell, clearing marks elsewhere
    pub fn check_all(&mut self) {
        for cell in &mut self.cells {
            cell.mark = if !cell.is_block && cell.entry.is_some() && cell.entry == cell.solution {
                CheckMark::Correct
            } else {
                CheckMark::None
            };
        }
    }

    /// Check a single clue's span
    ///
    /// Prior marks on the span are cleared first so marks never accumulate
    /// stale state.
    pub fn check_clue(&mut self, row: usize, col: usize, direction: Direction) {
        for i in self.span_indices(row, col, direction) {
            let cell = &mut self.cells[i];
            cell.mark = if cell.entry.is_some() && cell.entry == cell.solution {
                CheckMark::Correct
            } else {
                CheckMark::None
            };
        }
    }

    /// Clear every check mark
    pub fn clear_marks(&mut self) {
        for cell in &mut self.cells {
            cell.mark = CheckMark::None;
        }
    }

    /// Every non-block cell's entry equals its solution
    #[must_use]
    pub fn solved(&self) -> bool {
        self.cells.iter().all(Cell::is_correct)
    }
}

//! Precomputed "next open cell" navigation index
//!
//! Builds two total orderings of all cell indices (row-major for across
//! movement, column-major for down movement) plus inverse position maps.
//! A step walks the relevant ordering from the origin, wrapping modulo the
//! cell count, and returns the first non-block cell: O(1) amortized per
//! step, no grid rescans.

use super::grid::Grid;

/// Destination of a navigation step
///
/// `wrapped` reports whether the walk passed the ordering boundary; the UI
/// uses it to decide whether to flip direction at the end of a row or
/// column. Wrapping is a pure function of relative position, not of any
/// direction-switching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavResult {
    pub to: usize,
    pub wrapped: bool,
}

/// Navigation index over one grid shape
#[derive(Debug, Clone)]
pub struct Navigator {
    blocks: Vec<bool>,
    across_order: Vec<usize>,
    down_order: Vec<usize>,
    pos_across: Vec<usize>,
    pos_down: Vec<usize>,
}

impl Navigator {
    /// Build the index from a side length and per-cell block flags
    ///
    /// # Panics
    /// Panics if `blocks.len() != size * size`.
    #[must_use]
    pub fn new(size: usize, blocks: Vec<bool>) -> Self {
        let cells = size * size;
        assert_eq!(blocks.len(), cells, "block mask must cover the grid");

        let across_order: Vec<usize> = (0..cells).collect();
        let mut down_order = Vec::with_capacity(cells);
        for c in 0..size {
            for r in 0..size {
                down_order.push(r * size + c);
            }
        }

        let pos_across = invert(&across_order);
        let pos_down = invert(&down_order);

        Self {
            blocks,
            across_order,
            down_order,
            pos_across,
            pos_down,
        }
    }

    /// Build the index for a grid's current shape
    #[must_use]
    pub fn for_grid(grid: &Grid) -> Self {
        let blocks = grid.cells().iter().map(|c| c.is_block).collect();
        Self::new(grid.size(), blocks)
    }

    /// Next open cell rightward (row-major, wrapping)
    #[must_use]
    pub fn next_right_open(&self, from: usize) -> NavResult {
        self.next_in_order(from, &self.across_order, &self.pos_across, true)
    }

    /// Next open cell leftward
    #[must_use]
    pub fn next_left_open(&self, from: usize) -> NavResult {
        self.next_in_order(from, &self.across_order, &self.pos_across, false)
    }

    /// Next open cell downward (column-major, wrapping)
    #[must_use]
    pub fn next_down_open(&self, from: usize) -> NavResult {
        self.next_in_order(from, &self.down_order, &self.pos_down, true)
    }

    /// Next open cell upward
    #[must_use]
    pub fn next_up_open(&self, from: usize) -> NavResult {
        self.next_in_order(from, &self.down_order, &self.pos_down, false)
    }

    /// Where the cursor lands after typing a letter
    #[must_use]
    pub fn next_after_input(&self, down_mode: bool, from: usize) -> NavResult {
        if down_mode {
            self.next_down_open(from)
        } else {
            self.next_right_open(from)
        }
    }

    /// Where the cursor lands after a backspace on an empty cell
    #[must_use]
    pub fn prev_on_backspace(&self, down_mode: bool, from: usize) -> NavResult {
        if down_mode {
            self.next_up_open(from)
        } else {
            self.next_left_open(from)
        }
    }

    fn next_in_order(
        &self,
        from: usize,
        order: &[usize],
        pos_map: &[usize],
        forward: bool,
    ) -> NavResult {
        let n = order.len();
        let pos = pos_map[from];

        for step in 1..=n {
            let next_pos = if forward {
                (pos + step) % n
            } else {
                (pos + n - (step % n)) % n
            };
            let to = order[next_pos];
            if !self.blocks[to] {
                let wrapped = if forward { next_pos < pos } else { next_pos > pos };
                return NavResult { to, wrapped };
            }
        }

        // Every cell is blocked: stay put, no wrap.
        NavResult { to: from, wrapped: false }
    }
}

fn invert(order: &[usize]) -> Vec<usize> {
    let mut pos = vec![0; order.len()];
    for (i, &cell) in order.iter().enumerate() {
        pos[cell] = i;
    }
    pos
}

//! Lunamini, the 5x5 mini crossword
//!
//! A block-masked letter grid with automatic clue numbering, a precomputed
//! navigation index for cursor movement, and a session that ties grid,
//! clues, and saved entries together.

mod grid;
mod navigator;
mod session;

pub use grid::{CELLS, Cell, CheckMark, Clue, Direction, Grid, SIZE};
pub use navigator::{NavResult, Navigator};
pub use session::MiniSession;

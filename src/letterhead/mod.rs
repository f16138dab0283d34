//! Letterhead, the daily five-letter guessing game
//!
//! Six rows, five tiles each; pooled two-pass scoring handles duplicate
//! letters, and keyboard keys remember their best feedback so far.

mod round;
mod tile;

pub use round::{GuessRejection, MAX_ROWS, Round, RoundState, Tile};
pub use tile::{TileState, WORD_LEN, score_guess};

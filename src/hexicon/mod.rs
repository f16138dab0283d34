//! Hexicon, the spelling-bee-style word finder
//!
//! Seven letters, one required; find words, chase the target score, and
//! reveal the day's title by finding the intended pangram.

mod scoring;
mod session;

pub use scoring::{MIN_WORD_LEN, PANGRAM_BONUS, Scoring};
pub use session::{Bucket, HexiconSession, SubmitOutcome};

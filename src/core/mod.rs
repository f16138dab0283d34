//! Core domain shared by every game
//!
//! Normalization, the injectable date source, and the seven-letter set.
//! Everything here is pure and synchronous.

mod date;
mod letterset;
mod normalize;

pub use date::{
    DATE_FMT, DateProvider, FixedDates, SystemDates, clamp_requested, date_from_query, date_key,
    parse_date,
};
pub use letterset::{LETTER_COUNT, LetterSet};
pub use normalize::{normalize, normalize_upper};

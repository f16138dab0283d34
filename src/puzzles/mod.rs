//! Puzzle documents and where they come from

mod docs;
mod source;

pub use docs::{ClueDecl, CryptiniDoc, HexiconDoc, LetterheadDoc, MiniClues, MiniDoc};
pub use source::{DirSource, PuzzleSource, games};

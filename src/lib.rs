//! Lunamini
//!
//! Puzzle logic engines behind a family of daily word games: a
//! spelling-bee word finder ([`hexicon`]), a 5x5 mini crossword
//! ([`mini`]), a five-letter guessing game ([`letterhead`]), and a daily
//! cryptic clue ([`cryptini`]), plus a deterministic seeded generator for
//! bee puzzles. Engines are pure and synchronous; "today" and persistence
//! are injected through the [`core::DateProvider`] and
//! [`store::SnapshotStore`] seams.
//!
//! # Quick Start
//!
//! ```rust
//! use lunamini::letterhead::{TileState, score_guess};
//!
//! // Two-pass scoring handles duplicate letters correctly.
//! let tiles = score_guess("RATED", "CRANE");
//! assert_eq!(tiles[0], TileState::Present);
//! assert_eq!(tiles[2], TileState::Absent);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod errors;

// Curated puzzle documents and sources
pub mod puzzles;

// Snapshot persistence and progress badges
pub mod store;

// Game engines
pub mod cryptini;
pub mod hexicon;
pub mod letterhead;
pub mod mini;

// Deterministic puzzle generation
pub mod generator;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

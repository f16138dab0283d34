//! Error taxonomy for puzzle loading, hydration, and generation
//!
//! Rejected player actions (a word that isn't in the list, a half-filled
//! guess row) are ordinary return values on the engines, never errors.
//! Errors are reserved for malformed content, missing documents, and
//! exhausted generation budgets.

use thiserror::Error;

/// Errors surfaced by the puzzle engines and their collaborators
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The puzzle document is malformed: wrong row/letter counts, a clue
    /// referencing a non-entry cell, a declared answer disagreeing with the
    /// grid. Fatal to initializing that session.
    #[error("malformed puzzle content: {0}")]
    ContentIntegrity(String),

    /// No document exists for the requested date or slug. Recoverable by
    /// the caller (show "no puzzle today").
    #[error("no puzzle found for {0}")]
    NotFound(String),

    /// The generator ran out of attempts without finding a playable set.
    /// Surfaced to the authoring flow, never to the player-facing runtime.
    #[error("no playable letter set found within {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PuzzleError {
    /// Shorthand for a [`PuzzleError::ContentIntegrity`] with a formatted message
    pub fn content(msg: impl Into<String>) -> Self {
        Self::ContentIntegrity(msg.into())
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = PuzzleError::content("rows must be 5 strings of length 5");
        assert_eq!(
            e.to_string(),
            "malformed puzzle content: rows must be 5 strings of length 5"
        );

        let e = PuzzleError::NotFound("2025-09-04".to_string());
        assert_eq!(e.to_string(), "no puzzle found for 2025-09-04");

        let e = PuzzleError::GenerationExhausted { attempts: 5000 };
        assert_eq!(
            e.to_string(),
            "no playable letter set found within 5000 attempts"
        );
    }
}

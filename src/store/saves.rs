//! Serialized session snapshots, one shape per game
//!
//! Each record carries enough state to exactly reconstruct a session:
//! found words, grid entries, or the guess history. Written after every
//! accepted action, read once at initialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current snapshot schema version
pub const SAVE_VERSION: u32 = 1;

/// Bee-game snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexiconSave {
    pub version: u32,
    pub date: String,
    /// Compatibility check: must match the freshly loaded document.
    pub pangram: String,
    /// Compatibility check, paired with `pangram`.
    pub required: char,
    pub found: Vec<String>,
    pub score: u32,
    pub target_score: u32,
    pub saved_at: DateTime<Utc>,
}

/// Mini-crossword snapshot: player entries in row-major cell order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniSave {
    pub date: String,
    /// `None` for blocks and empty cells.
    pub entries: Vec<Option<char>>,
    pub solved: bool,
    pub saved_at: DateTime<Utc>,
}

/// Wordle-style snapshot: normalized guesses plus the answer they were
/// scored against
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterheadSave {
    pub date: String,
    pub guesses: Vec<String>,
    /// The round's answer; a snapshot is only replayed when this matches
    /// the loaded document.
    pub letterhead: String,
    pub saved_at: DateTime<Utc>,
}

/// Cryptic-clue snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptiniSave {
    pub date: String,
    pub solved: bool,
    pub revealed: bool,
    pub hints_revealed: usize,
    pub saved_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexicon_save_round_trip() {
        let save = HexiconSave {
            version: SAVE_VERSION,
            date: "2025-09-04".to_string(),
            pangram: "abcdefg".to_string(),
            required: 'a',
            found: vec!["face".to_string()],
            score: 2,
            target_score: 6,
            saved_at: Utc::now(),
        };

        let json = serde_json::to_string(&save).unwrap();
        let back: HexiconSave = serde_json::from_str(&json).unwrap();
        assert_eq!(back.found, vec!["face"]);
        assert_eq!(back.required, 'a');
        assert_eq!(back.score, 2);
    }

    #[test]
    fn mini_save_preserves_holes() {
        let save = MiniSave {
            date: "2025-09-04".to_string(),
            entries: vec![Some('A'), None, Some('C')],
            solved: false,
            saved_at: Utc::now(),
        };

        let json = serde_json::to_string(&save).unwrap();
        let back: MiniSave = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries, vec![Some('A'), None, Some('C')]);
    }

    #[test]
    fn field_names_are_camel_case() {
        let save = CryptiniSave {
            date: "2025-09-04".to_string(),
            solved: true,
            revealed: false,
            hints_revealed: 2,
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string(&save).unwrap();
        assert!(json.contains("\"hintsRevealed\":2"));
        assert!(json.contains("\"savedAt\""));
    }
}

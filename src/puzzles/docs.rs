//! Curated puzzle document shapes
//!
//! One JSON document per game per day (or per special slug). These are the
//! read-only inputs to the engines; semantic validation happens at hydrate
//! time, not here.

use serde::{Deserialize, Serialize};

/// Bee-game document: letter set, required letter, and the curated word list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexiconDoc {
    #[serde(default)]
    pub date: String,
    /// The intended full-letter word; finding it reveals the day's title.
    #[serde(default)]
    pub pangram: String,
    pub letters: Vec<char>,
    pub required: char,
    pub words: Vec<String>,
    #[serde(default)]
    pub themed: bool,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// One declared crossword clue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueDecl {
    pub row: usize,
    pub col: usize,
    pub clue: String,
    /// Optional cross-check: must match the grid solution along the span.
    #[serde(default)]
    pub answer: Option<String>,
}

/// Across/down clue declarations for the mini crossword
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniClues {
    pub across: Vec<ClueDecl>,
    pub down: Vec<ClueDecl>,
}

/// Mini-crossword document: title, author, row strings, optional highlights
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniDoc {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    /// Row strings, `#` for blocks, letters elsewhere.
    pub rows: Vec<String>,
    /// Optional parallel mask, `*` marks highlighted cells.
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    pub clues: MiniClues,
}

/// Wordle-style document: the day's answer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterheadDoc {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub answer: String,
}

/// Cryptic-clue document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptiniDoc {
    #[serde(default)]
    pub date: String,
    pub clue: String,
    pub answer: String,
    /// Letter-count enumeration such as `(5)` or `(4,3)`.
    #[serde(default)]
    pub enumeration: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Accepted alternate answers, compared normalized.
    #[serde(default)]
    pub alternates: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexicon_doc_parses_minimal_json() {
        let doc: HexiconDoc = serde_json::from_str(
            r#"{
                "letters": ["a","b","c","d","e","f","g"],
                "required": "a",
                "words": ["face", "abcdefg"]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.required, 'a');
        assert_eq!(doc.words.len(), 2);
        assert!(!doc.themed);
        assert!(doc.tagline.is_none());
    }

    #[test]
    fn mini_doc_parses_with_clues() {
        let doc: MiniDoc = serde_json::from_str(
            r##"{
                "title": "Test",
                "rows": ["AB#","CDE","#FG"],
                "clues": {
                    "across": [{"row": 0, "col": 0, "clue": "First", "answer": "AB"}],
                    "down": [{"row": 0, "col": 1, "clue": "Second"}]
                }
            }"##,
        )
        .unwrap();

        assert_eq!(doc.rows.len(), 3);
        assert_eq!(doc.clues.across[0].answer.as_deref(), Some("AB"));
        assert!(doc.clues.down[0].answer.is_none());
        assert!(doc.highlights.is_none());
    }

    #[test]
    fn cryptini_doc_defaults() {
        let doc: CryptiniDoc = serde_json::from_str(
            r#"{"clue": "Quiet meal for a bird (5)", "answer": "snipe"}"#,
        )
        .unwrap();

        assert!(doc.hints.is_empty());
        assert!(doc.alternates.is_empty());
        assert!(doc.explanation.is_none());
    }

    #[test]
    fn documents_round_trip() {
        let doc = LetterheadDoc {
            date: Some("2025-09-04".to_string()),
            author: Some("luna".to_string()),
            answer: "CRANE".to_string(),
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: LetterheadDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(back.answer, "CRANE");
        assert_eq!(back.date.as_deref(), Some("2025-09-04"));
    }
}

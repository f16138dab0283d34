//! Content checking command
//!
//! Validates one day's curated documents across all four games: present,
//! parseable, and able to hydrate into a playable session. Unlike the
//! runtime loaders (which collapse every failure to "no puzzle today"),
//! this reports parse errors and integrity problems separately so content
//! authors can fix them.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::core::date_key;
use crate::cryptini::CryptiniSession;
use crate::hexicon::HexiconSession;
use crate::letterhead::Round;
use crate::mini::MiniSession;
use crate::puzzles::{CryptiniDoc, HexiconDoc, LetterheadDoc, MiniDoc, games};

/// Outcome of checking one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocStatus {
    /// Present and playable; carries a short human summary.
    Ok(String),
    Missing,
    /// Present but unreadable, unparseable, or semantically broken.
    Invalid(String),
}

/// One game's check result for the day
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub game: &'static str,
    pub slug: String,
    pub status: DocStatus,
}

impl CheckReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self.status, DocStatus::Ok(_))
    }
}

/// Check all four games' documents for one date
#[must_use]
pub fn run_check(root: &Path, date: NaiveDate) -> Vec<CheckReport> {
    let slug = date_key(date);

    vec![
        check_one(root, games::HEXICON, &slug, |raw| {
            let doc: HexiconDoc = serde_json::from_str(raw).map_err(|e| e.to_string())?;
            let session = HexiconSession::hydrate(&doc, date).map_err(|e| e.to_string())?;
            Ok(format!(
                "{} words, target {}",
                session.valid_words().len(),
                session.target_score()
            ))
        }),
        check_one(root, games::MINI, &slug, |raw| {
            let doc: MiniDoc = serde_json::from_str(raw).map_err(|e| e.to_string())?;
            let session = MiniSession::hydrate(&doc, date).map_err(|e| e.to_string())?;
            Ok(format!(
                "{} across, {} down",
                session.across().len(),
                session.down().len()
            ))
        }),
        check_one(root, games::LETTERHEAD, &slug, |raw| {
            let doc: LetterheadDoc = serde_json::from_str(raw).map_err(|e| e.to_string())?;
            let round = Round::new(&doc.answer, None, &slug).map_err(|e| e.to_string())?;
            Ok(format!("answer has {} letters", round.answer().len()))
        }),
        check_one(root, games::CRYPTINI, &slug, |raw| {
            let doc: CryptiniDoc = serde_json::from_str(raw).map_err(|e| e.to_string())?;
            let session = CryptiniSession::hydrate(&doc, date).map_err(|e| e.to_string())?;
            Ok(format!("{} hints", session.hint_count()))
        }),
    ]
}

fn check_one(
    root: &Path,
    game: &'static str,
    slug: &str,
    hydrate: impl FnOnce(&str) -> std::result::Result<String, String>,
) -> CheckReport {
    let path = root.join(game).join(format!("{slug}.json"));
    let status = if path.exists() {
        match fs::read_to_string(&path) {
            Ok(raw) => match hydrate(&raw) {
                Ok(detail) => DocStatus::Ok(detail),
                Err(reason) => DocStatus::Invalid(reason),
            },
            Err(e) => DocStatus::Invalid(e.to_string()),
        }
    } else {
        DocStatus::Missing
    };

    CheckReport {
        game,
        slug: slug.to_string(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()
    }

    fn write(root: &Path, game: &str, body: &str) {
        let dir = root.join(game);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("2025-09-04.json"), body).unwrap();
    }

    #[test]
    fn empty_root_reports_all_missing() {
        let dir = tempfile::tempdir().unwrap();
        let reports = run_check(dir.path(), day());
        assert_eq!(reports.len(), 4);
        assert!(reports.iter().all(|r| r.status == DocStatus::Missing));
    }

    #[test]
    fn valid_documents_report_ok_with_detail() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            games::LETTERHEAD,
            r#"{"answer": "CRANE"}"#,
        );
        write(
            dir.path(),
            games::CRYPTINI,
            r#"{"clue": "Quiet meal for a bird (5)", "answer": "snipe", "hints": ["a", "b"]}"#,
        );

        let reports = run_check(dir.path(), day());
        let letterhead = reports
            .iter()
            .find(|r| r.game == games::LETTERHEAD)
            .unwrap();
        assert_eq!(letterhead.status, DocStatus::Ok("answer has 5 letters".to_string()));

        let cryptini = reports.iter().find(|r| r.game == games::CRYPTINI).unwrap();
        assert_eq!(cryptini.status, DocStatus::Ok("2 hints".to_string()));
    }

    #[test]
    fn parse_errors_and_integrity_errors_are_invalid() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), games::HEXICON, "{not json");
        // Parseable but semantically broken: only six letters.
        write(
            dir.path(),
            games::LETTERHEAD,
            r#"{"answer": "CAT"}"#,
        );

        let reports = run_check(dir.path(), day());
        let hexicon = reports.iter().find(|r| r.game == games::HEXICON).unwrap();
        assert!(matches!(hexicon.status, DocStatus::Invalid(_)));

        let letterhead = reports
            .iter()
            .find(|r| r.game == games::LETTERHEAD)
            .unwrap();
        assert!(matches!(letterhead.status, DocStatus::Invalid(_)));
        assert!(!letterhead.is_ok());
    }

    #[test]
    fn valid_hexicon_reports_word_count() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            games::HEXICON,
            r#"{
                "pangram": "abcdefg",
                "letters": ["a","b","c","d","e","f","g"],
                "required": "a",
                "words": ["face", "abcdefg"]
            }"#,
        );

        let reports = run_check(dir.path(), day());
        let hexicon = reports.iter().find(|r| r.game == games::HEXICON).unwrap();
        match &hexicon.status {
            DocStatus::Ok(detail) => assert!(detail.starts_with("2 words")),
            other => panic!("expected ok, got {other:?}"),
        }
    }
}

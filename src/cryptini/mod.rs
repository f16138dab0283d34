//! Cryptini, the daily cryptic clue
//!
//! One clue, one answer, a hint ladder, and a reveal escape hatch. Guesses
//! are compared normalized (letters only, case-folded) so punctuation and
//! spacing in multi-word answers never matter.

use chrono::{NaiveDate, Utc};

use crate::core::{DateProvider, date_key, normalize};
use crate::errors::{PuzzleError, Result};
use crate::puzzles::{CryptiniDoc, PuzzleSource, games};
use crate::store::{CryptiniSave, SnapshotStore, key_for};

/// What a guess submission reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Incorrect,
}

/// One cryptic-clue session for one puzzle day
#[derive(Debug, Clone)]
pub struct CryptiniSession {
    slug: String,
    clue: String,
    answer: String,
    normalized_answer: String,
    alternates: Vec<String>,
    enumeration: String,
    author: Option<String>,
    explanation: Option<String>,
    hints: Vec<String>,
    solved: bool,
    revealed: bool,
    hints_revealed: usize,
}

impl CryptiniSession {
    /// Hydrate from a curated document
    ///
    /// # Errors
    /// [`PuzzleError::ContentIntegrity`] when the answer normalizes to the
    /// empty string.
    pub fn hydrate(doc: &CryptiniDoc, date: NaiveDate) -> Result<Self> {
        let normalized_answer = normalize(&doc.answer);
        if normalized_answer.is_empty() {
            return Err(PuzzleError::content("answer has no letters"));
        }

        Ok(Self {
            slug: if doc.date.is_empty() {
                date_key(date)
            } else {
                doc.date.clone()
            },
            clue: doc.clue.clone(),
            answer: doc.answer.clone(),
            normalized_answer,
            alternates: doc.alternates.iter().map(|a| normalize(a)).collect(),
            enumeration: doc.enumeration.clone(),
            author: doc.author.clone(),
            explanation: doc.explanation.clone(),
            hints: doc.hints.clone(),
            solved: false,
            revealed: false,
            hints_revealed: 0,
        })
    }

    /// Load today's clue and restore saved progress
    ///
    /// # Errors
    /// [`PuzzleError::NotFound`] when no document exists for today; content
    /// errors from [`CryptiniSession::hydrate`].
    pub fn load(
        source: &dyn PuzzleSource,
        dates: &dyn DateProvider,
        store: &dyn SnapshotStore,
    ) -> Result<Self> {
        let today = dates.today();
        let doc = source
            .load_cryptini(today)
            .ok_or_else(|| PuzzleError::NotFound(date_key(today)))?;
        let mut session = Self::hydrate(&doc, today)?;
        session.restore(store);
        Ok(session)
    }

    // --- Read surface ---

    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    #[must_use]
    pub fn enumeration(&self) -> &str {
        &self.enumeration
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    #[must_use]
    pub fn solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// The answer, shown only once the session is over
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        if self.solved || self.revealed {
            Some(&self.answer)
        } else {
            None
        }
    }

    /// The setter's explanation, shown only once the session is over
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        if self.solved || self.revealed {
            self.explanation.as_deref()
        } else {
            None
        }
    }

    /// Hints revealed so far, in ladder order
    #[must_use]
    pub fn visible_hints(&self) -> &[String] {
        &self.hints[..self.hints_revealed]
    }

    #[must_use]
    pub fn hints_revealed(&self) -> usize {
        self.hints_revealed
    }

    #[must_use]
    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }

    // --- Play ---

    /// Compare a guess to the answer and its accepted alternates
    ///
    /// A correct guess marks the session solved; solved is sticky, later
    /// wrong guesses cannot unsolve it.
    pub fn submit(&mut self, guess: &str) -> GuessResult {
        let guess = normalize(guess);
        let correct = !guess.is_empty()
            && (guess == self.normalized_answer || self.alternates.contains(&guess));
        if correct {
            self.solved = true;
            GuessResult::Correct
        } else {
            GuessResult::Incorrect
        }
    }

    /// Reveal the next hint on the ladder, saturating at the last one
    pub fn reveal_hint(&mut self) {
        if self.hints_revealed < self.hints.len() {
            self.hints_revealed += 1;
        }
    }

    /// Give up: expose the answer without counting it as solved fairly
    pub fn reveal(&mut self) {
        self.revealed = true;
        self.solved = true;
    }

    // --- Persistence ---

    fn store_key(&self) -> String {
        key_for(games::CRYPTINI, &self.slug)
    }

    /// Serializable capture of the session's progress
    #[must_use]
    pub fn snapshot(&self) -> CryptiniSave {
        CryptiniSave {
            date: self.slug.clone(),
            solved: self.solved,
            revealed: self.revealed,
            hints_revealed: self.hints_revealed,
            saved_at: Utc::now(),
        }
    }

    /// Write the current snapshot to the store
    pub fn save(&self, store: &mut dyn SnapshotStore) {
        if let Ok(json) = serde_json::to_string(&self.snapshot()) {
            store.set(&self.store_key(), &json);
        }
    }

    /// Restore saved progress; the hint count is clamped to the ladder
    pub fn restore(&mut self, store: &dyn SnapshotStore) {
        let Some(raw) = store.get(&self.store_key()) else {
            return;
        };
        let Ok(save) = serde_json::from_str::<CryptiniSave>(&raw) else {
            return;
        };
        self.solved = save.solved;
        self.revealed = save.revealed;
        self.hints_revealed = save.hints_revealed.min(self.hints.len());
    }

    /// Clear the stored snapshot and start over
    pub fn reset(&mut self, store: &mut dyn SnapshotStore) {
        store.remove(&self.store_key());
        self.solved = false;
        self.revealed = false;
        self.hints_revealed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn doc() -> CryptiniDoc {
        CryptiniDoc {
            date: String::new(),
            clue: "Quiet meal for a bird (5)".to_string(),
            answer: "snipe".to_string(),
            enumeration: "(5)".to_string(),
            author: Some("luna".to_string()),
            explanation: Some("SH + nip + E".to_string()),
            hints: vec![
                "It's a wading bird.".to_string(),
                "Starts with S.".to_string(),
            ],
            alternates: vec!["snipes".to_string()],
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()
    }

    #[test]
    fn hydrate_rejects_letterless_answer() {
        let mut d = doc();
        d.answer = "1234!".to_string();
        assert!(matches!(
            CryptiniSession::hydrate(&d, day()),
            Err(PuzzleError::ContentIntegrity(_))
        ));
    }

    #[test]
    fn guesses_compare_normalized() {
        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        assert_eq!(s.submit("heron"), GuessResult::Incorrect);
        assert!(!s.solved());
        assert_eq!(s.submit("  S-N-I-P-E "), GuessResult::Correct);
        assert!(s.solved());
        assert_eq!(s.answer(), Some("snipe"));
    }

    #[test]
    fn alternates_are_accepted() {
        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        assert_eq!(s.submit("SNIPES"), GuessResult::Correct);
    }

    #[test]
    fn solved_is_sticky() {
        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        s.submit("snipe");
        assert_eq!(s.submit("wrong"), GuessResult::Incorrect);
        assert!(s.solved());
    }

    #[test]
    fn empty_guess_never_solves() {
        let mut d = doc();
        d.alternates.clear();
        let mut s = CryptiniSession::hydrate(&d, day()).unwrap();
        assert_eq!(s.submit("  !! "), GuessResult::Incorrect);
        assert!(!s.solved());
    }

    #[test]
    fn answer_and_explanation_hide_until_over() {
        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        assert_eq!(s.answer(), None);
        assert_eq!(s.explanation(), None);
        s.reveal();
        assert!(s.revealed());
        assert!(s.solved());
        assert_eq!(s.explanation(), Some("SH + nip + E"));
    }

    #[test]
    fn hint_ladder_saturates() {
        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        assert!(s.visible_hints().is_empty());
        s.reveal_hint();
        assert_eq!(s.visible_hints().len(), 1);
        s.reveal_hint();
        s.reveal_hint();
        assert_eq!(s.hints_revealed(), 2);
        assert_eq!(s.visible_hints()[1], "Starts with S.");
    }

    #[test]
    fn save_restore_round_trip() {
        let mut store = MemoryStore::new();
        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        s.reveal_hint();
        s.submit("snipe");
        s.save(&mut store);

        let mut fresh = CryptiniSession::hydrate(&doc(), day()).unwrap();
        fresh.restore(&store);
        assert!(fresh.solved());
        assert!(!fresh.revealed());
        assert_eq!(fresh.hints_revealed(), 1);
    }

    #[test]
    fn restore_clamps_hint_count() {
        let mut store = MemoryStore::new();
        let save = CryptiniSave {
            date: "2025-09-04".to_string(),
            solved: false,
            revealed: false,
            hints_revealed: 99,
            saved_at: Utc::now(),
        };
        store.set(
            &key_for(games::CRYPTINI, "2025-09-04"),
            &serde_json::to_string(&save).unwrap(),
        );

        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        s.restore(&store);
        assert_eq!(s.hints_revealed(), 2);
    }

    #[test]
    fn reset_clears_progress_and_store() {
        let mut store = MemoryStore::new();
        let mut s = CryptiniSession::hydrate(&doc(), day()).unwrap();
        s.reveal();
        s.save(&mut store);

        s.reset(&mut store);
        assert!(store.is_empty());
        assert!(!s.solved());
        assert_eq!(s.answer(), None);
    }
}

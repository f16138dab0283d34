//! Bee-game session engine
//!
//! Owns the letter set, the curated valid-word list, the player's found
//! words and score, and the current entry buffer. Every accepted submission
//! produces a serializable snapshot for the store; a stored snapshot is
//! replayed at startup only if it matches the freshly loaded document.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use rustc_hash::FxHashSet;

use super::scoring::Scoring;
use crate::core::{DateProvider, LetterSet, date_key, normalize};
use crate::errors::{PuzzleError, Result};
use crate::puzzles::{HexiconDoc, PuzzleSource, games};
use crate::store::{HexiconSave, SAVE_VERSION, SnapshotStore, key_for};

/// Result of a submission attempt
///
/// Rejections leave the session state untouched (the entry buffer is still
/// cleared for word-level rejections, matching the feel of the game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word was added; `points` is the delta applied to the score.
    Accepted {
        word: String,
        points: u32,
        is_pangram: bool,
    },
    /// Too short, missing the required letter, or using foreign letters.
    NotSubmittable,
    /// Not in the curated valid-word list.
    NotInWordList,
    /// Already found this session.
    AlreadyFound,
}

/// Per-first-letter progress bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub letter: char,
    pub found: usize,
    pub total: usize,
}

impl Bucket {
    /// A bucket is cleared when every word starting with its letter is found
    #[must_use]
    pub const fn cleared(&self) -> bool {
        self.found == self.total
    }
}

/// One bee-game session for one puzzle day
#[derive(Debug, Clone)]
pub struct HexiconSession {
    slug: String,
    letter_set: LetterSet,
    scoring: Scoring,
    valid: Vec<String>,
    valid_set: FxHashSet<String>,
    found: FxHashSet<String>,
    score: u32,
    target_score: u32,
    pangram: String,
    title_revealed: bool,
    entry: String,
    themed: bool,
    tagline: Option<String>,
}

impl HexiconSession {
    /// Hydrate a fresh session from a curated document
    ///
    /// # Errors
    /// [`PuzzleError::ContentIntegrity`] when the document does not carry
    /// exactly seven distinct letters, when a listed word breaks the
    /// subset/required-letter invariant, or when the declared pangram does
    /// not use all seven letters.
    pub fn hydrate(doc: &HexiconDoc, date: NaiveDate) -> Result<Self> {
        let letter_set = LetterSet::new(doc.required, doc.letters.iter().copied())?;
        let scoring = Scoring::default();

        let mut valid = Vec::with_capacity(doc.words.len());
        let mut valid_set = FxHashSet::default();
        for raw in &doc.words {
            let w = normalize(raw);
            if !letter_set.is_submittable(&w, scoring.min_len()) {
                return Err(PuzzleError::content(format!(
                    "word '{raw}' is not playable with this letter set"
                )));
            }
            if valid_set.insert(w.clone()) {
                valid.push(w);
            }
        }

        let pangram = normalize(&doc.pangram);
        if !pangram.is_empty() && !letter_set.is_pangram(&pangram) {
            return Err(PuzzleError::content(format!(
                "declared pangram '{pangram}' does not use all seven letters"
            )));
        }

        let target_score = scoring.total(&valid, &letter_set);

        Ok(Self {
            slug: date_key(date),
            letter_set,
            scoring,
            valid,
            valid_set,
            found: FxHashSet::default(),
            score: 0,
            target_score,
            pangram,
            title_revealed: false,
            entry: String::new(),
            themed: doc.themed,
            tagline: doc.tagline.clone(),
        })
    }

    /// Load today's puzzle and replay any compatible stored snapshot
    ///
    /// # Errors
    /// [`PuzzleError::NotFound`] when no document exists for today;
    /// content-integrity errors from [`HexiconSession::hydrate`].
    pub fn load(
        source: &dyn PuzzleSource,
        dates: &dyn DateProvider,
        store: &dyn SnapshotStore,
    ) -> Result<Self> {
        let today = dates.today();
        let doc = source
            .load_hexicon(today)
            .ok_or_else(|| PuzzleError::NotFound(date_key(today)))?;
        let mut session = Self::hydrate(&doc, today)?;
        session.restore(store);
        Ok(session)
    }

    // --- Entry buffer ---

    /// Append a letter to the entry buffer; letters outside the set are
    /// ignored
    pub fn push_letter(&mut self, c: char) {
        let c = c.to_ascii_lowercase();
        if self.letter_set.contains(c) {
            self.entry.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.entry.pop();
    }

    pub fn clear_entry(&mut self) {
        self.entry.clear();
    }

    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Whether the current entry meets the submittability rules
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.letter_set
            .is_submittable(&self.entry, self.scoring.min_len())
    }

    // --- Submission protocol ---

    /// Submit the entry buffer
    ///
    /// A non-submittable entry is rejected with the buffer intact; word
    /// rejections (unknown or duplicate) clear the buffer. An accepted word
    /// adds its points, and finding the designated pangram permanently
    /// reveals the title for this session.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::NotSubmittable;
        }

        let word = normalize(&self.entry);
        self.entry.clear();

        if !self.valid_set.contains(&word) {
            return SubmitOutcome::NotInWordList;
        }
        if self.found.contains(&word) {
            return SubmitOutcome::AlreadyFound;
        }

        let points = self.scoring.word(&word, &self.letter_set);
        let is_pangram = self.letter_set.is_pangram(&word);
        self.found.insert(word.clone());
        self.score += points;
        if word == self.pangram {
            self.title_revealed = true;
        }

        SubmitOutcome::Accepted {
            word,
            points,
            is_pangram,
        }
    }

    /// Reorder the visual ring with a caller-supplied generator
    pub fn shuffle_ring<R: Rng>(&mut self, rng: &mut R) {
        self.letter_set.shuffle_ring(rng);
    }

    // --- Progress ---

    /// First-letter buckets, recomputed from scratch
    ///
    /// Recomputation (rather than incremental tracking) keeps the buckets
    /// correct across reset and restore.
    #[must_use]
    pub fn buckets(&self) -> Vec<Bucket> {
        let mut buckets: Vec<Bucket> = Vec::new();
        for word in &self.valid {
            let Some(letter) = word.chars().next() else {
                continue;
            };
            let found = usize::from(self.found.contains(word));
            match buckets.iter_mut().find(|b| b.letter == letter) {
                Some(b) => {
                    b.total += 1;
                    b.found += found;
                }
                None => buckets.push(Bucket {
                    letter,
                    found,
                    total: 1,
                }),
            }
        }
        buckets.sort_unstable_by_key(|b| b.letter);
        buckets
    }

    /// Score as a fraction of the target, for progress bars
    #[must_use]
    pub fn score_ratio(&self) -> f64 {
        if self.target_score == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.target_score)
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn letter_set(&self) -> &LetterSet {
        &self.letter_set
    }

    #[must_use]
    pub fn valid_words(&self) -> &[String] {
        &self.valid
    }

    #[must_use]
    pub fn found(&self) -> &FxHashSet<String> {
        &self.found
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn target_score(&self) -> u32 {
        self.target_score
    }

    #[must_use]
    pub const fn title_revealed(&self) -> bool {
        self.title_revealed
    }

    /// Display title revealed by the pangram, e.g. `biologist (b)`
    #[must_use]
    pub fn pangram_title(&self) -> String {
        if self.pangram.is_empty() {
            String::new()
        } else {
            format!("{} ({})", self.pangram, self.letter_set.required())
        }
    }

    #[must_use]
    pub const fn themed(&self) -> bool {
        self.themed
    }

    #[must_use]
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    // --- Persistence ---

    fn store_key(&self) -> String {
        key_for(games::HEXICON, &self.slug)
    }

    /// Serializable capture of the session
    #[must_use]
    pub fn snapshot(&self) -> HexiconSave {
        let mut found: Vec<String> = self.found.iter().cloned().collect();
        found.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        HexiconSave {
            version: SAVE_VERSION,
            date: self.slug.clone(),
            pangram: self.pangram.clone(),
            required: self.letter_set.required(),
            found,
            score: self.score,
            target_score: self.target_score,
            saved_at: Utc::now(),
        }
    }

    /// Write the current snapshot to the store
    pub fn save(&self, store: &mut dyn SnapshotStore) {
        if let Ok(json) = serde_json::to_string(&self.snapshot()) {
            store.set(&self.store_key(), &json);
        }
    }

    /// Replay a stored snapshot if it matches this puzzle
    ///
    /// A snapshot whose pangram or required letter disagrees with the
    /// loaded document is treated as "no saved state".
    pub fn restore(&mut self, store: &dyn SnapshotStore) {
        let Some(raw) = store.get(&self.store_key()) else {
            return;
        };
        let Ok(save) = serde_json::from_str::<HexiconSave>(&raw) else {
            return;
        };
        if !save.pangram.eq_ignore_ascii_case(&self.pangram)
            || save.required != self.letter_set.required()
        {
            return;
        }

        self.found = save.found.into_iter().collect();
        self.score = save.score;
        self.title_revealed = self.found.contains(&self.pangram);
    }

    /// Clear both the stored snapshot and the in-memory progress
    pub fn reset(&mut self, store: &mut dyn SnapshotStore) {
        store.remove(&self.store_key());
        self.found.clear();
        self.score = 0;
        self.title_revealed = false;
        self.entry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedDates;
    use crate::store::MemoryStore;

    fn doc() -> HexiconDoc {
        HexiconDoc {
            date: "2025-09-04".to_string(),
            pangram: "abcdefg".to_string(),
            letters: "abcdefg".chars().collect(),
            required: 'a',
            words: vec!["abcdefg".to_string(), "face".to_string()],
            themed: false,
            tagline: None,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()
    }

    fn type_word(session: &mut HexiconSession, word: &str) {
        session.clear_entry();
        for c in word.chars() {
            session.push_letter(c);
        }
    }

    #[test]
    fn end_to_end_example() {
        let mut session = HexiconSession::hydrate(&doc(), day()).unwrap();
        assert_eq!(session.target_score(), 2 + 18);

        type_word(&mut session, "face");
        let outcome = session.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "face".to_string(),
                points: 2,
                is_pangram: false,
            }
        );
        assert_eq!(session.score(), 2);
        assert!(!session.title_revealed());

        type_word(&mut session, "abcdefg");
        let outcome = session.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "abcdefg".to_string(),
                points: 18,
                is_pangram: true,
            }
        );
        assert_eq!(session.score(), 20);
        assert!(session.title_revealed());
        assert_eq!(session.pangram_title(), "abcdefg (a)");
    }

    #[test]
    fn rejections_leave_state_unchanged() {
        let mut session = HexiconSession::hydrate(&doc(), day()).unwrap();

        // Too short: buffer is kept for further typing.
        type_word(&mut session, "ace");
        assert_eq!(session.submit(), SubmitOutcome::NotSubmittable);
        assert_eq!(session.entry(), "ace");
        assert_eq!(session.score(), 0);

        // Unknown word: rejected, buffer cleared.
        type_word(&mut session, "cage");
        assert_eq!(session.submit(), SubmitOutcome::NotInWordList);
        assert_eq!(session.entry(), "");
        assert_eq!(session.score(), 0);

        // Duplicate.
        type_word(&mut session, "face");
        assert!(matches!(session.submit(), SubmitOutcome::Accepted { .. }));
        type_word(&mut session, "face");
        assert_eq!(session.submit(), SubmitOutcome::AlreadyFound);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn push_letter_ignores_foreign_letters() {
        let mut session = HexiconSession::hydrate(&doc(), day()).unwrap();
        session.push_letter('a');
        session.push_letter('z');
        session.push_letter('B');
        assert_eq!(session.entry(), "ab");
        session.backspace();
        assert_eq!(session.entry(), "a");
    }

    #[test]
    fn buckets_track_first_letters() {
        let mut d = doc();
        d.words.push("bead".to_string());
        let mut session = HexiconSession::hydrate(&d, day()).unwrap();

        type_word(&mut session, "face");
        assert!(matches!(session.submit(), SubmitOutcome::Accepted { .. }));

        let buckets = session.buckets();
        assert_eq!(
            buckets,
            vec![
                Bucket { letter: 'a', found: 0, total: 1 },
                Bucket { letter: 'b', found: 0, total: 1 },
                Bucket { letter: 'f', found: 1, total: 1 },
            ]
        );
        assert!(buckets[2].cleared());
        assert!(!buckets[0].cleared());
    }

    #[test]
    fn hydrate_rejects_bad_documents() {
        let mut d = doc();
        d.letters.pop();
        assert!(matches!(
            HexiconSession::hydrate(&d, day()),
            Err(PuzzleError::ContentIntegrity(_))
        ));

        let mut d = doc();
        d.words.push("zebra".to_string());
        assert!(HexiconSession::hydrate(&d, day()).is_err());

        let mut d = doc();
        d.pangram = "face".to_string();
        assert!(HexiconSession::hydrate(&d, day()).is_err());
    }

    #[test]
    fn save_restore_round_trip() {
        let mut store = MemoryStore::new();
        let mut session = HexiconSession::hydrate(&doc(), day()).unwrap();

        type_word(&mut session, "face");
        assert!(matches!(session.submit(), SubmitOutcome::Accepted { .. }));
        session.save(&mut store);

        let mut fresh = HexiconSession::hydrate(&doc(), day()).unwrap();
        fresh.restore(&store);
        assert_eq!(fresh.score(), 2);
        assert!(fresh.found().contains("face"));
        assert!(!fresh.title_revealed());
    }

    #[test]
    fn restore_ignores_mismatched_snapshot() {
        let mut store = MemoryStore::new();
        let mut session = HexiconSession::hydrate(&doc(), day()).unwrap();
        type_word(&mut session, "face");
        session.submit();
        session.save(&mut store);

        // A different day's puzzle with another pangram, same key.
        let mut other = doc();
        other.pangram = "gabfced".to_string();
        other.words = vec!["gabfced".to_string(), "bead".to_string()];
        let mut fresh = HexiconSession::hydrate(&other, day()).unwrap();
        fresh.restore(&store);
        assert_eq!(fresh.score(), 0);
        assert!(fresh.found().is_empty());
    }

    #[test]
    fn reset_clears_store_and_state() {
        let mut store = MemoryStore::new();
        let mut session = HexiconSession::hydrate(&doc(), day()).unwrap();
        type_word(&mut session, "face");
        session.submit();
        session.save(&mut store);

        session.reset(&mut store);
        assert_eq!(session.score(), 0);
        assert!(session.found().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn load_uses_source_and_store() {
        struct OneDoc;
        impl PuzzleSource for OneDoc {
            fn load_hexicon(&self, _date: NaiveDate) -> Option<HexiconDoc> {
                Some(doc())
            }
            fn load_mini(&self, _date: NaiveDate) -> Option<crate::puzzles::MiniDoc> {
                None
            }
            fn load_letterhead(&self, _date: NaiveDate) -> Option<crate::puzzles::LetterheadDoc> {
                None
            }
            fn load_letterhead_special(
                &self,
                _slug: &str,
            ) -> Option<crate::puzzles::LetterheadDoc> {
                None
            }
            fn load_cryptini(&self, _date: NaiveDate) -> Option<crate::puzzles::CryptiniDoc> {
                None
            }
            fn allowed_guesses(&self) -> Option<Vec<String>> {
                None
            }
        }

        let store = MemoryStore::new();
        let session = HexiconSession::load(&OneDoc, &FixedDates(day()), &store).unwrap();
        assert_eq!(session.target_score(), 20);

        struct Empty;
        impl PuzzleSource for Empty {
            fn load_hexicon(&self, _date: NaiveDate) -> Option<HexiconDoc> {
                None
            }
            fn load_mini(&self, _date: NaiveDate) -> Option<crate::puzzles::MiniDoc> {
                None
            }
            fn load_letterhead(&self, _date: NaiveDate) -> Option<crate::puzzles::LetterheadDoc> {
                None
            }
            fn load_letterhead_special(
                &self,
                _slug: &str,
            ) -> Option<crate::puzzles::LetterheadDoc> {
                None
            }
            fn load_cryptini(&self, _date: NaiveDate) -> Option<crate::puzzles::CryptiniDoc> {
                None
            }
            fn allowed_guesses(&self) -> Option<Vec<String>> {
                None
            }
        }
        assert!(matches!(
            HexiconSession::load(&Empty, &FixedDates(day()), &store),
            Err(PuzzleError::NotFound(_))
        ));
    }
}

//! The seven-letter set at the heart of the bee game
//!
//! A [`LetterSet`] is always exactly seven distinct lowercase letters with
//! the required letter stored at index 0 (convenient for drawing the ring).
//! Both the play-time validator and the offline generator share this type,
//! so the pangram and submittability rules live here.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

use crate::errors::{PuzzleError, Result};

/// Number of letters in a set
pub const LETTER_COUNT: usize = 7;

/// Seven distinct lowercase letters, required letter first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: [char; LETTER_COUNT],
}

impl LetterSet {
    /// Build a set from a required letter and an iterator of letters
    ///
    /// The iterator may or may not include the required letter; input is
    /// lowercased and deduplicated while preserving first-seen order for the
    /// ring.
    ///
    /// # Errors
    /// Returns [`PuzzleError::ContentIntegrity`] unless the input yields
    /// exactly seven distinct ASCII letters including the required one.
    pub fn new(required: char, letters: impl IntoIterator<Item = char>) -> Result<Self> {
        let required = required.to_ascii_lowercase();
        if !required.is_ascii_lowercase() {
            return Err(PuzzleError::content(format!(
                "required letter {required:?} is not a letter"
            )));
        }

        let mut seen = FxHashSet::default();
        let mut distinct = Vec::with_capacity(LETTER_COUNT);
        for c in letters {
            let c = c.to_ascii_lowercase();
            if !c.is_ascii_lowercase() {
                return Err(PuzzleError::content(format!("{c:?} is not a letter")));
            }
            if seen.insert(c) {
                distinct.push(c);
            }
        }

        if distinct.len() != LETTER_COUNT {
            return Err(PuzzleError::content(format!(
                "puzzle must contain exactly {LETTER_COUNT} unique letters, got {}",
                distinct.len()
            )));
        }
        if !seen.contains(&required) {
            return Err(PuzzleError::content(format!(
                "required letter '{required}' is not in the letter set"
            )));
        }

        // Required at index 0, ring in first-seen order after it.
        let mut arranged = [required; LETTER_COUNT];
        for (slot, c) in arranged[1..]
            .iter_mut()
            .zip(distinct.into_iter().filter(|&c| c != required))
        {
            *slot = c;
        }

        Ok(Self { letters: arranged })
    }

    /// The required letter
    #[inline]
    #[must_use]
    pub const fn required(&self) -> char {
        self.letters[0]
    }

    /// All seven letters, required first
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; LETTER_COUNT] {
        &self.letters
    }

    /// The six non-required letters in their current display order
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &[char] {
        &self.letters[1..]
    }

    /// Whether a letter belongs to the set
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c.to_ascii_lowercase())
    }

    /// Whether a normalized word may be submitted: long enough, uses the
    /// required letter, and draws only from this set
    #[must_use]
    pub fn is_submittable(&self, word: &str, min_len: usize) -> bool {
        word.len() >= min_len
            && word.contains(self.required())
            && word.chars().all(|c| self.contains(c))
    }

    /// Whether a normalized word uses every letter of the set at least once
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        let word_letters: FxHashSet<char> = word.chars().collect();
        word_letters.len() == LETTER_COUNT && self.letters.iter().all(|c| word_letters.contains(c))
    }

    /// Reorder the ring with a caller-supplied generator
    ///
    /// Seeded shuffles keep the visual letter ring reproducible; the
    /// required letter stays at index 0.
    pub fn shuffle_ring<R: Rng>(&mut self, rng: &mut R) {
        self.letters[1..].shuffle(rng);
    }
}

impl std::fmt::Display for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.letters.iter().collect::<String>())
    }
}

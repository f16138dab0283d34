//! Tiered word scoring for the bee game
//!
//! Points come from a hard-coded per-length tier table, not a linear
//! length scale: 4 letters are cheap, long words jump quickly, and a
//! pangram always earns a flat bonus on top of its tier.

use crate::core::LetterSet;

/// Default minimum submittable word length
pub const MIN_WORD_LEN: usize = 4;

/// Flat bonus added when a word uses all seven letters
pub const PANGRAM_BONUS: u32 = 6;

/// Scoring rules for one puzzle
#[derive(Debug, Clone, Copy)]
pub struct Scoring {
    min_len: usize,
    pangram_bonus: u32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            pangram_bonus: PANGRAM_BONUS,
        }
    }
}

impl Scoring {
    #[must_use]
    pub const fn new(min_len: usize, pangram_bonus: u32) -> Self {
        Self {
            min_len,
            pangram_bonus,
        }
    }

    /// Minimum submittable length
    #[inline]
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Points for a single normalized word
    ///
    /// Tier table: 4 letters score 2, 5 score 5, 6 score 8, 7 score 12,
    /// longer words 16. Words under the minimum length score 0. The
    /// pangram bonus applies regardless of length.
    ///
    /// # Examples
    /// ```
    /// use lunamini::core::LetterSet;
    /// use lunamini::hexicon::Scoring;
    ///
    /// let set = LetterSet::new('a', "abcdefg".chars()).unwrap();
    /// let scoring = Scoring::default();
    /// assert_eq!(scoring.word("face", &set), 2);
    /// assert_eq!(scoring.word("abcdefg", &set), 12 + 6); // tier + pangram bonus
    /// ```
    #[must_use]
    pub fn word(&self, w: &str, set: &LetterSet) -> u32 {
        if w.len() < self.min_len {
            return 0;
        }

        let base = match w.len() {
            4 => 2,
            5 => 5,
            6 => 8,
            7 => 12,
            _ => 16,
        };

        if set.is_pangram(w) {
            base + self.pangram_bonus
        } else {
            base
        }
    }

    /// Sum of [`Scoring::word`] over a word list
    ///
    /// Used as the 100% denominator for the progress ratio.
    #[must_use]
    pub fn total<'a>(&self, words: impl IntoIterator<Item = &'a String>, set: &LetterSet) -> u32 {
        words.into_iter().map(|w| self.word(w, set)).sum()
    }
}

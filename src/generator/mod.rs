//! Deterministic bee-puzzle generation
//!
//! The same seed string and dictionary always produce the same puzzle:
//! the seed is hashed to a stream cipher RNG, the dictionary is sorted
//! before any shuffle, and parallel filtering preserves dictionary order.
//! Generation works pangram-first: words with exactly seven distinct
//! letters make natural letter sets, and only if none of them yields a
//! playable puzzle does a random-set fallback kick in.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use sha2::{Digest, Sha256};

use crate::core::{LETTER_COUNT, LetterSet, date_key, normalize};
use crate::errors::{PuzzleError, Result};
use crate::hexicon::{MIN_WORD_LEN, PANGRAM_BONUS, Scoring};
use crate::puzzles::HexiconDoc;

/// Fraction of the full score that becomes the day's target
pub const TARGET_RATIO: f64 = 0.3;

/// Tunable limits for one generation run
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Minimum submittable word length.
    pub min_len: usize,
    /// Reject sets with fewer valid words than this.
    pub min_words: usize,
    /// Reject sets with more valid words than this.
    pub max_words: usize,
    /// Pangram candidates examined before falling back.
    pub pangram_tries: usize,
    /// Random letter sets examined in the fallback phase.
    pub fallback_tries: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            min_words: 10,
            max_words: 250,
            pangram_tries: 200,
            fallback_tries: 5000,
        }
    }
}

/// A finished puzzle, ready to serialize as a curated document
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    pub seed: String,
    pub required: char,
    /// Required letter first, ring order already shuffled.
    pub letters: [char; LETTER_COUNT],
    pub min_word_length: usize,
    pub target_score: u32,
    /// Valid words in dictionary (sorted) order.
    pub words: Vec<String>,
    pub pangram: String,
}

impl GeneratedPuzzle {
    /// Convert into the document shape the bee game loads
    #[must_use]
    pub fn into_doc(self, date: &str) -> HexiconDoc {
        HexiconDoc {
            date: date.to_string(),
            pangram: self.pangram,
            letters: self.letters.to_vec(),
            required: self.required,
            words: self.words,
            themed: false,
            tagline: None,
        }
    }
}

/// Hash a seed string to a 64-bit RNG seed
///
/// SHA-256 of the string, first eight bytes little-endian. Stable across
/// platforms and releases; published puzzles depend on it.
#[must_use]
pub fn stable_seed(seed_str: &str) -> u64 {
    let digest = Sha256::digest(seed_str.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Puzzle generator over a fixed dictionary
#[derive(Debug, Clone)]
pub struct Generator {
    /// Normalized, deduplicated, sorted.
    words: Vec<String>,
}

impl Generator {
    /// Build a generator from any word list
    ///
    /// Words are normalized to lowercase letters, deduplicated, and sorted
    /// so generation is independent of input order.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Number of dictionary words available
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Generate the puzzle for a date, with an optional salt
    ///
    /// The seed string is the ISO date, or `date:salt` when a salt is
    /// given, so regenerating a published day is always possible.
    ///
    /// # Errors
    /// See [`Generator::generate`].
    pub fn generate_for_date(
        &self,
        date: NaiveDate,
        salt: Option<&str>,
        config: &GeneratorConfig,
    ) -> Result<GeneratedPuzzle> {
        let seed = match salt {
            Some(s) if !s.is_empty() => format!("{}:{s}", date_key(date)),
            _ => date_key(date),
        };
        self.generate(&seed, config)
    }

    /// Generate a puzzle from an explicit seed string
    ///
    /// # Errors
    /// [`PuzzleError::GenerationExhausted`] when neither the pangram
    /// candidates nor the random fallback produce a set whose valid-word
    /// count lands inside the configured band.
    pub fn generate(&self, seed_str: &str, config: &GeneratorConfig) -> Result<GeneratedPuzzle> {
        let mut rng = ChaCha8Rng::seed_from_u64(stable_seed(seed_str));
        let mut attempts = 0usize;

        let mut candidates: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|w| distinct_letters(w).len() == LETTER_COUNT)
            .collect();
        candidates.shuffle(&mut rng);
        candidates.truncate(config.pangram_tries);

        for candidate in candidates {
            let mut letters = distinct_letters(candidate);
            letters.shuffle(&mut rng);
            for &required in &letters {
                attempts += 1;
                let set = LetterSet::new(required, letters.iter().copied())?;
                let valid = self.valid_words(&set, config.min_len);
                if in_band(valid.len(), config) {
                    // The candidate itself is always among the valid words.
                    return Ok(Self::finish(
                        seed_str,
                        set,
                        valid,
                        candidate.to_string(),
                        &mut rng,
                        config,
                    ));
                }
            }
        }

        for _ in 0..config.fallback_tries {
            attempts += 1;
            let letters = random_letters(&mut rng);
            let set = LetterSet::new(letters[0], letters.iter().copied())?;
            let valid = self.valid_words(&set, config.min_len);
            if in_band(valid.len(), config)
                && let Some(pangram) = valid.iter().find(|w| set.is_pangram(w)).cloned()
            {
                return Ok(Self::finish(seed_str, set, valid, pangram, &mut rng, config));
            }
        }

        Err(PuzzleError::GenerationExhausted { attempts })
    }

    fn valid_words(&self, set: &LetterSet, min_len: usize) -> Vec<String> {
        self.words
            .par_iter()
            .filter(|w| set.is_submittable(w, min_len))
            .cloned()
            .collect()
    }

    fn finish(
        seed: &str,
        mut set: LetterSet,
        words: Vec<String>,
        pangram: String,
        rng: &mut ChaCha8Rng,
        config: &GeneratorConfig,
    ) -> GeneratedPuzzle {
        set.shuffle_ring(rng);
        let scoring = Scoring::new(config.min_len, PANGRAM_BONUS);
        let total = scoring.total(&words, &set);
        let target_score = (f64::from(total) * TARGET_RATIO).round() as u32;

        GeneratedPuzzle {
            seed: seed.to_string(),
            required: set.required(),
            letters: *set.letters(),
            min_word_length: config.min_len,
            target_score,
            words,
            pangram,
        }
    }
}

fn in_band(count: usize, config: &GeneratorConfig) -> bool {
    (config.min_words..=config.max_words).contains(&count)
}

/// Distinct letters of a normalized word, in first-seen order
fn distinct_letters(word: &str) -> Vec<char> {
    let mut seen = [false; 26];
    let mut out = Vec::new();
    for c in word.chars() {
        let i = (c as usize - 'a' as usize) % 26;
        if !seen[i] {
            seen[i] = true;
            out.push(c);
        }
    }
    out
}

/// Seven distinct random lowercase letters
fn random_letters(rng: &mut ChaCha8Rng) -> [char; LETTER_COUNT] {
    let mut seen = [false; 26];
    let mut out = ['a'; LETTER_COUNT];
    let mut filled = 0;
    while filled < LETTER_COUNT {
        let i = rng.random_range(0..26usize);
        if !seen[i] {
            seen[i] = true;
            out[filled] = char::from(b'a' + u8::try_from(i).unwrap_or(0));
            filled += 1;
        }
    }
    out
}

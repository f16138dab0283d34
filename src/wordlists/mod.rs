//! Word lists for puzzle generation
//!
//! Provides an embedded dictionary compiled into the binary, plus a file
//! loader for callers who bring their own list.

mod embedded;
pub mod loader;

pub use embedded::{WORD_COUNT, WORDS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_matches_const() {
        assert_eq!(WORDS.len(), WORD_COUNT);
    }

    #[test]
    fn words_are_lowercase_and_long_enough() {
        for &word in WORDS {
            assert!(word.len() >= 4, "word '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_sorted_and_unique() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' >= '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn dictionary_contains_pangram_candidates() {
        // Generation needs at least one word with exactly seven distinct
        // letters to seed a letter set.
        let has_candidate = WORDS.iter().any(|w| {
            let distinct: std::collections::HashSet<char> = w.chars().collect();
            distinct.len() == 7
        });
        assert!(has_candidate);
    }
}

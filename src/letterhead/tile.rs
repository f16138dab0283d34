//! Guess scoring for the daily five-letter word
//!
//! Two-pass evaluation with a letter pool so duplicate letters are marked
//! correctly: a letter only shows as present while unmatched copies of it
//! remain in the answer.

/// Fixed answer and guess length
pub const WORD_LEN: usize = 5;

/// Feedback state of one tile (and of one keyboard key)
///
/// The declaration order is a priority ladder: keyboard state only ever
/// upgrades, so `Correct` beats `Present` beats `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TileState {
    #[default]
    Empty,
    Pending,
    Absent,
    Present,
    Correct,
}

/// Score a guess against the answer
///
/// Both strings must be uppercase ASCII of length [`WORD_LEN`]; sessions
/// normalize before calling. Pass one fixes exact matches and removes them
/// from the pool; pass two marks remaining letters present while the pool
/// still holds a copy, absent otherwise.
///
/// # Examples
/// ```
/// use lunamini::letterhead::{TileState, score_guess};
///
/// let tiles = score_guess("RATED", "CRANE");
/// assert_eq!(
///     tiles,
///     [
///         TileState::Present,
///         TileState::Present,
///         TileState::Absent,
///         TileState::Present,
///         TileState::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &str, answer: &str) -> [TileState; WORD_LEN] {
    let guess = as_letters(guess);
    let answer = as_letters(answer);

    let mut states = [TileState::Absent; WORD_LEN];
    let mut pool = [0u8; 26];

    for i in 0..WORD_LEN {
        if guess[i] == answer[i] {
            states[i] = TileState::Correct;
        } else {
            pool[letter_index(answer[i])] += 1;
        }
    }

    for i in 0..WORD_LEN {
        if states[i] == TileState::Correct {
            continue;
        }
        let slot = &mut pool[letter_index(guess[i])];
        if *slot > 0 {
            *slot -= 1;
            states[i] = TileState::Present;
        }
    }

    states
}

fn as_letters(word: &str) -> [u8; WORD_LEN] {
    let mut out = [b'A'; WORD_LEN];
    for (i, b) in word.bytes().take(WORD_LEN).enumerate() {
        out[i] = b.to_ascii_uppercase();
    }
    out
}

fn letter_index(b: u8) -> usize {
    usize::from(b - b'A') % 26
}

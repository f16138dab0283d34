//! Home-page progress badges derived from stored snapshots
//!
//! Reads a game's snapshot (if any) and maps it to a coarse 0..=3 level
//! plus a "show the puzzle title" flag. A corrupt snapshot reports no
//! progress rather than an error; the badge is cosmetic.

use super::saves::{CryptiniSave, HexiconSave, LetterheadSave, MiniSave};
use super::{SnapshotStore, key_for};
use crate::puzzles::games;

/// Hexicon counts as finished at this fraction of the target score.
const HEXICON_DONE_RATIO: f64 = 0.66;

/// Coarse per-game progress for the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 0 = untouched, 1 = started, 2 = finished without winning, 3 = won.
    pub level: u8,
    pub show_title: bool,
}

impl Progress {
    const fn new(level: u8, show_title: bool) -> Self {
        Self { level, show_title }
    }
}

/// Progress for `game` keyed by a date or slug
///
/// Returns `None` for unknown games and for snapshots that fail to parse.
#[must_use]
pub fn progress_for(store: &dyn SnapshotStore, game: &str, slug: &str) -> Option<Progress> {
    let raw = store.get(&key_for(game, slug));

    match game {
        games::HEXICON => {
            let Some(raw) = raw else {
                return Some(Progress::new(0, false));
            };
            let save: HexiconSave = serde_json::from_str(&raw).ok()?;
            let show_title = save.found.iter().any(|w| *w == save.pangram);
            let done = f64::from(save.score) >= f64::from(save.target_score) * HEXICON_DONE_RATIO;
            if done {
                Some(Progress::new(3, show_title))
            } else if save.found.is_empty() {
                Some(Progress::new(0, false))
            } else {
                Some(Progress::new(1, show_title))
            }
        }
        games::LETTERHEAD => {
            let Some(raw) = raw else {
                return Some(Progress::new(0, false));
            };
            let save: LetterheadSave = serde_json::from_str(&raw).ok()?;
            if save.guesses.iter().any(|g| *g == save.letterhead) {
                Some(Progress::new(3, true))
            } else if save.guesses.len() >= crate::letterhead::MAX_ROWS {
                Some(Progress::new(2, true))
            } else if save.guesses.is_empty() {
                Some(Progress::new(0, false))
            } else {
                Some(Progress::new(1, false))
            }
        }
        games::MINI => {
            let Some(raw) = raw else {
                return Some(Progress::new(0, true));
            };
            let save: MiniSave = serde_json::from_str(&raw).ok()?;
            if save.solved {
                Some(Progress::new(3, true))
            } else if save.entries.iter().any(Option::is_some) {
                Some(Progress::new(1, true))
            } else {
                Some(Progress::new(0, true))
            }
        }
        games::CRYPTINI => {
            let Some(raw) = raw else {
                return Some(Progress::new(0, true));
            };
            let save: CryptiniSave = serde_json::from_str(&raw).ok()?;
            if save.solved && !save.revealed {
                Some(Progress::new(3, true))
            } else if save.revealed {
                Some(Progress::new(2, true))
            } else if save.hints_revealed > 0 {
                Some(Progress::new(1, true))
            } else {
                Some(Progress::new(0, true))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SAVE_VERSION};
    use chrono::Utc;

    fn store_with(game: &str, slug: &str, json: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(&key_for(game, slug), json);
        store
    }

    #[test]
    fn fresh_keys_report_level_zero() {
        let store = MemoryStore::new();
        let p = progress_for(&store, games::HEXICON, "2025-09-04").unwrap();
        assert_eq!(p, Progress::new(0, false));

        let p = progress_for(&store, games::CRYPTINI, "2025-09-04").unwrap();
        assert_eq!(p, Progress::new(0, true));
    }

    #[test]
    fn unknown_game_is_none() {
        let store = MemoryStore::new();
        assert!(progress_for(&store, "sudoku", "2025-09-04").is_none());
    }

    #[test]
    fn corrupt_snapshot_is_none() {
        let store = store_with(games::MINI, "2025-09-04", "{ not json");
        assert!(progress_for(&store, games::MINI, "2025-09-04").is_none());
    }

    #[test]
    fn hexicon_levels() {
        let save = HexiconSave {
            version: SAVE_VERSION,
            date: "2025-09-04".to_string(),
            pangram: "abcdefg".to_string(),
            required: 'a',
            found: vec!["face".to_string()],
            score: 2,
            target_score: 20,
            saved_at: Utc::now(),
        };
        let store = store_with(
            games::HEXICON,
            "2025-09-04",
            &serde_json::to_string(&save).unwrap(),
        );
        assert_eq!(
            progress_for(&store, games::HEXICON, "2025-09-04").unwrap(),
            Progress::new(1, false)
        );

        let done = HexiconSave {
            found: vec!["face".to_string(), "abcdefg".to_string()],
            score: 20,
            ..save
        };
        let store = store_with(
            games::HEXICON,
            "2025-09-04",
            &serde_json::to_string(&done).unwrap(),
        );
        assert_eq!(
            progress_for(&store, games::HEXICON, "2025-09-04").unwrap(),
            Progress::new(3, true)
        );
    }

    #[test]
    fn letterhead_levels() {
        let base = LetterheadSave {
            date: "2025-09-04".to_string(),
            guesses: vec!["SLATE".to_string()],
            letterhead: "CRANE".to_string(),
            saved_at: Utc::now(),
        };
        let store = store_with(
            games::LETTERHEAD,
            "2025-09-04",
            &serde_json::to_string(&base).unwrap(),
        );
        assert_eq!(
            progress_for(&store, games::LETTERHEAD, "2025-09-04").unwrap(),
            Progress::new(1, false)
        );

        let won = LetterheadSave {
            guesses: vec!["SLATE".to_string(), "CRANE".to_string()],
            ..base.clone()
        };
        let store = store_with(
            games::LETTERHEAD,
            "2025-09-04",
            &serde_json::to_string(&won).unwrap(),
        );
        assert_eq!(
            progress_for(&store, games::LETTERHEAD, "2025-09-04").unwrap(),
            Progress::new(3, true)
        );

        let lost = LetterheadSave {
            guesses: vec!["SLATE".to_string(); 6],
            ..base
        };
        let store = store_with(
            games::LETTERHEAD,
            "2025-09-04",
            &serde_json::to_string(&lost).unwrap(),
        );
        assert_eq!(
            progress_for(&store, games::LETTERHEAD, "2025-09-04").unwrap(),
            Progress::new(2, true)
        );
    }

    #[test]
    fn cryptini_levels() {
        let save = CryptiniSave {
            date: "2025-09-04".to_string(),
            solved: false,
            revealed: false,
            hints_revealed: 1,
            saved_at: Utc::now(),
        };
        let store = store_with(
            games::CRYPTINI,
            "2025-09-04",
            &serde_json::to_string(&save).unwrap(),
        );
        assert_eq!(
            progress_for(&store, games::CRYPTINI, "2025-09-04").unwrap(),
            Progress::new(1, true)
        );

        let revealed = CryptiniSave {
            solved: true,
            revealed: true,
            ..save
        };
        let store = store_with(
            games::CRYPTINI,
            "2025-09-04",
            &serde_json::to_string(&revealed).unwrap(),
        );
        assert_eq!(
            progress_for(&store, games::CRYPTINI, "2025-09-04").unwrap(),
            Progress::new(2, true)
        );
    }
}

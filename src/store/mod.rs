//! Durable snapshot storage surface
//!
//! The browser shell owns a string key/value store (backed by local
//! storage); the engines only ever see this narrow get/set/remove surface.
//! Keys are `"{game}:{date-or-slug}"`. Absence of a key means a fresh
//! session; snapshots that fail their compatibility check are simply
//! ignored.

mod progress;
mod saves;

use rustc_hash::FxHashMap;

pub use progress::{Progress, progress_for};
pub use saves::{CryptiniSave, HexiconSave, LetterheadSave, MiniSave, SAVE_VERSION};

/// String-keyed blob store for per-session snapshots
pub trait SnapshotStore {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&mut self, key: &str, value: &str);

    /// Delete the blob under `key`
    fn remove(&mut self, key: &str);
}

/// Snapshot key for a game and its date-or-slug
#[must_use]
pub fn key_for(game: &str, slug: &str) -> String {
    format!("{game}:{slug}")
}

/// In-memory store for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

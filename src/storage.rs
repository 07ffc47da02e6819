//! Persisted layout preferences.
//!
//! DESIGN
//! ======
//! The dock controller never touches browser storage directly. It is handed
//! a [`LayoutStore`] at construction so the clamp/persist logic can be unit
//! tested against [`MemoryStore`]; the browser-backed implementation lives
//! in the `web` module behind the `hydrate` feature.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Last user-chosen dock dimensions, durable for one browser session.
///
/// A zero dimension means "no preference recorded for that axis".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSize {
    /// Dock width in CSS pixels; meaningful for left/right dock positions.
    pub width: f64,
    /// Dock height in CSS pixels; meaningful for top/bottom dock positions.
    pub height: f64,
}

/// Key/value store for layout preferences, scoped to the browser session.
///
/// A read miss is "no preference", never an error. Writes are
/// last-writer-wins with no locking; only one dock is active per session.
pub trait LayoutStore {
    /// Read the stored size for `key`, if any.
    fn get(&self, key: &str) -> Option<PersistedSize>;

    /// Overwrite the stored size for `key`. Best-effort.
    fn set(&mut self, key: &str, size: PersistedSize);
}

/// In-process store used on native builds and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, PersistedSize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PersistedSize> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, size: PersistedSize) {
        self.entries.insert(key.to_owned(), size);
    }
}

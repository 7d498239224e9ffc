//! In-memory note store.
//!
//! The store is plain owned data with no interior locking; the server wraps a
//! single instance in a mutex so each request sees it exclusively.

use tracing::debug;

use crate::config::SeedNote;
use crate::models::Note;

/// Insertion-ordered collection of notes keyed by caller-chosen ids.
///
/// Iteration order is the order in which keys were first inserted, so listings
/// and summaries are deterministic.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    entries: Vec<(String, Note)>,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given seed notes, in order.
    #[must_use]
    pub fn seeded(seeds: &[SeedNote]) -> Self {
        let mut store = Self::new();
        for seed in seeds {
            store.set(seed.id.clone(), Note::new(seed.content.clone()));
        }
        debug!(count = store.len(), "note store seeded");
        store
    }

    /// Look up a note by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Note> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Mutable lookup by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Note> {
        self.position(key).map(move |idx| &mut self.entries[idx].1)
    }

    /// Whether a note with this key exists.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert a note, or overwrite an existing one in place.
    ///
    /// Overwriting keeps the key's original position in iteration order.
    pub fn set(&mut self, key: impl Into<String>, note: Note) {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = note,
            None => self.entries.push((key, note)),
        }
    }

    /// Remove a note; returns `true` if it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Iterate `(key, note)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Note)> {
        self.entries.iter().map(|(key, note)| (key.as_str(), note))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

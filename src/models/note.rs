//! Note record held by the in-memory store.

use chrono::{DateTime, SecondsFormat, Utc};

/// A single note: text content plus creation and modification timestamps.
///
/// The key is not part of the record; the [`NoteStore`](crate::store::NoteStore)
/// owns the mapping from key to note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Note body.
    pub content: String,
    /// Creation timestamp, fixed for the lifetime of the note.
    created_at: DateTime<Utc>,
    /// Timestamp of the last content change.
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Construct a note created now.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_created(content, Utc::now())
    }

    /// Construct a note with an explicit creation time.
    #[must_use]
    pub fn with_created(content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            created_at: at,
            updated_at: at,
        }
    }

    /// Replace the content and stamp `updated_at` with the current time.
    pub fn revise(&mut self, content: impl Into<String>) {
        self.revise_at(content, Utc::now());
    }

    /// Replace the content and stamp `updated_at` with `at`.
    ///
    /// `updated_at` never precedes `created_at`, even if the wall clock stepped
    /// backwards between creation and revision.
    pub fn revise_at(&mut self, content: impl Into<String>, at: DateTime<Utc>) {
        self.content = content.into();
        self.updated_at = at.max(self.created_at);
    }

    /// When the note was created.
    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the note content last changed.
    #[must_use]
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Render a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2025-01-01T09:30:00.000Z`.
#[must_use]
pub fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

//! `note:///{id}` and `note:///all` MCP resource handlers.
//!
//! The listing is a projection of the store taken at call time; nothing is
//! cached between requests.

use serde::Serialize;
use tracing::debug;

use crate::mcp::schema::{ALL_NOTES_KEY, ALL_NOTES_URI, MIME_JSON, MIME_TEXT, NOTE_URI_PREFIX};
use crate::models::note::iso8601;
use crate::store::NoteStore;
use crate::{AppError, Result};

/// Display name of the aggregate resource.
pub const ALL_NOTES_NAME: &str = "All Notes";

/// Description of the aggregate resource.
pub const ALL_NOTES_DESCRIPTION: &str = "A JSON list of all available notes with metadata";

/// One entry of a resource listing, shaped like the wire descriptor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Addressable URI.
    pub uri: String,
    /// Display name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// MIME type of the content returned by a read.
    pub mime_type: &'static str,
}

/// Content returned by a resource read, shaped like the wire contents entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    /// The URI that was read.
    pub uri: String,
    /// `text/plain` for a note, `application/json` for the aggregate.
    pub mime_type: &'static str,
    /// Body.
    pub text: String,
}

/// A note as it appears in the aggregate JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteView<'a> {
    id: &'a str,
    content: &'a str,
    created_at: String,
    updated_at: String,
}

/// Where a `note:///` URI points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTarget<'a> {
    /// The aggregate of all notes.
    All,
    /// A single note by key.
    Note(&'a str),
}

/// Parse a `note:///…` URI.
///
/// # Examples
///
/// ```
/// use notes_mcp::mcp::resources::notes::{parse_note_uri, NoteTarget};
///
/// assert_eq!(parse_note_uri("note:///all").ok(), Some(NoteTarget::All));
/// assert_eq!(parse_note_uri("note:///todo").ok(), Some(NoteTarget::Note("todo")));
/// assert!(parse_note_uri("http://example.com").is_err());
/// ```
///
/// # Errors
///
/// Returns `AppError::UnknownCapability` if the URI is outside the `note:///`
/// scheme.
pub fn parse_note_uri(uri: &str) -> Result<NoteTarget<'_>> {
    let rest = uri
        .strip_prefix(NOTE_URI_PREFIX)
        .ok_or_else(|| AppError::unsupported_scheme(uri))?;
    if rest == ALL_NOTES_KEY {
        Ok(NoteTarget::All)
    } else {
        Ok(NoteTarget::Note(rest))
    }
}

/// URI addressing the note with key `id`.
#[must_use]
pub fn note_uri(id: &str) -> String {
    format!("{NOTE_URI_PREFIX}{id}")
}

/// List one descriptor per stored note, in insertion order, followed by the
/// aggregate descriptor.
#[must_use]
pub fn list_resources(store: &NoteStore) -> Vec<ResourceDescriptor> {
    let mut resources: Vec<ResourceDescriptor> = store
        .entries()
        .map(|(id, note)| ResourceDescriptor {
            uri: note_uri(id),
            name: format!("Note: {id}"),
            description: format!(
                "A note with ID \"{id}\" (created: {})",
                iso8601(note.created())
            ),
            mime_type: MIME_TEXT,
        })
        .collect();

    resources.push(ResourceDescriptor {
        uri: ALL_NOTES_URI.into(),
        name: ALL_NOTES_NAME.into(),
        description: ALL_NOTES_DESCRIPTION.into(),
        mime_type: MIME_JSON,
    });

    resources
}

/// Resolve a resource URI against the store.
///
/// # Errors
///
/// Returns `AppError::UnknownCapability` for a non-`note:///` URI,
/// `AppError::NotFound` for a missing key, and `AppError::Serialization` if the
/// aggregate fails to serialize.
pub fn read_resource(store: &NoteStore, uri: &str) -> Result<ResourceContent> {
    let content = match parse_note_uri(uri)? {
        NoteTarget::All => ResourceContent {
            uri: uri.to_owned(),
            mime_type: MIME_JSON,
            text: all_notes_json(store)?,
        },
        NoteTarget::Note(id) => {
            let note = store
                .get(id)
                .ok_or_else(|| AppError::NotFound(id.to_owned()))?;
            ResourceContent {
                uri: uri.to_owned(),
                mime_type: MIME_TEXT,
                text: note.content.clone(),
            }
        }
    };

    debug!(uri, mime_type = content.mime_type, "resource read");
    Ok(content)
}

fn all_notes_json(store: &NoteStore) -> Result<String> {
    let views: Vec<NoteView<'_>> = store
        .entries()
        .map(|(id, note)| NoteView {
            id,
            content: &note.content,
            created_at: iso8601(note.created()),
            updated_at: iso8601(note.updated()),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

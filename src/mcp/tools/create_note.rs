//! `create_note` tool: insert a new note.

use serde::Deserialize;
use tracing::info;

use crate::models::Note;
use crate::store::NoteStore;
use crate::{AppError, Result};

/// Input parameters for `create_note`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateNoteInput {
    /// Key of the new note.
    pub id: String,
    /// Initial content.
    pub content: String,
}

/// Handle the `create_note` tool call.
///
/// # Errors
///
/// Returns `AppError::Validation` for an empty id and `AppError::Conflict`
/// if the id is already taken.
pub fn run(store: &mut NoteStore, input: CreateNoteInput) -> Result<String> {
    if input.id.is_empty() {
        return Err(AppError::Validation("note id must not be empty".into()));
    }
    if store.has(&input.id) {
        return Err(AppError::Conflict(input.id));
    }

    let text = format!("Note \"{}\" created successfully", input.id);
    info!(note_id = %input.id, "note created");
    store.set(input.id, Note::new(input.content));
    Ok(text)
}

//! `update_note` tool: replace an existing note's content.

use serde::Deserialize;
use tracing::info;

use crate::store::NoteStore;
use crate::{AppError, Result};

/// Input parameters for `update_note`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpdateNoteInput {
    /// Key of the note to update.
    pub id: String,
    /// Replacement content.
    pub content: String,
}

/// Handle the `update_note` tool call.
///
/// The note keeps its creation timestamp; only content and `updated_at` change.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no note has this id.
pub fn run(store: &mut NoteStore, input: UpdateNoteInput) -> Result<String> {
    let note = store
        .get_mut(&input.id)
        .ok_or_else(|| AppError::NotFound(input.id.clone()))?;
    note.revise(input.content);

    info!(note_id = %input.id, "note updated");
    Ok(format!("Note \"{}\" updated successfully", input.id))
}

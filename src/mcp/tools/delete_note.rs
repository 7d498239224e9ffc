//! `delete_note` tool: remove a note.

use serde::Deserialize;
use tracing::info;

use crate::store::NoteStore;
use crate::{AppError, Result};

/// Input parameters for `delete_note`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeleteNoteInput {
    /// Key of the note to delete.
    pub id: String,
}

/// Handle the `delete_note` tool call.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no note has this id; the store is left
/// untouched.
pub fn run(store: &mut NoteStore, input: &DeleteNoteInput) -> Result<String> {
    if !store.delete(&input.id) {
        return Err(AppError::NotFound(input.id.clone()));
    }

    info!(note_id = %input.id, "note deleted");
    Ok(format!("Note \"{}\" deleted successfully", input.id))
}

//! Prompt text templates.

use crate::store::NoteStore;

/// Marker used in place of the note list when the store is empty.
pub const NO_NOTES: &str = "none";

/// Ask for a summary of every note, one `- id: content` line each.
#[must_use]
pub fn summarize_notes(store: &NoteStore) -> String {
    let lines = store
        .entries()
        .map(|(id, note)| format!("- {id}: {}", note.content))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Please summarize these notes:\n\n{lines}\n\n\
         Provide a concise overview of the main topics and ideas."
    )
}

/// Ask for a step-by-step solution, pointing at the `calculate` tool.
#[must_use]
pub fn math_tutor(problem: &str) -> String {
    format!(
        "I need help solving this math problem: {problem}\n\n\
         Please break down the solution step by step. \
         You can use the \"calculate\" tool to perform arithmetic operations."
    )
}

/// Ask for help with a note task, listing current keys and the note tools.
#[must_use]
pub fn note_assistant(store: &NoteStore, task: &str) -> String {
    let keys = store.keys().collect::<Vec<_>>().join(", ");
    let listed = if keys.is_empty() { NO_NOTES } else { &keys };
    format!(
        "I need help with my notes. Current notes: {listed}\n\n\
         Task: {task}\n\n\
         You can use create_note, update_note, and delete_note tools to help me manage my notes."
    )
}

//! Domain model module declarations.

pub mod note;

pub use note::Note;

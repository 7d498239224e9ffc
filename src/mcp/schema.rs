//! Static capability registry: tool input schemas, prompt argument lists, and
//! resource catalog constants.
//!
//! Everything here is immutable for the process lifetime. The resource
//! catalog itself is derived from the note store per request; only its
//! addressing scheme lives here.

use serde::Serialize;
use serde_json::json;

/// Scheme prefix every note resource URI begins with.
pub const NOTE_URI_PREFIX: &str = "note:///";

/// Path segment that addresses the aggregate of all notes.
pub const ALL_NOTES_KEY: &str = "all";

/// Full URI of the aggregate resource.
pub const ALL_NOTES_URI: &str = "note:///all";

/// MIME type of a single note resource.
pub const MIME_TEXT: &str = "text/plain";

/// MIME type of the aggregate resource.
pub const MIME_JSON: &str = "application/json";

/// Tool name: arithmetic on two numbers.
pub const CALCULATE: &str = "calculate";
/// Tool name: insert a new note.
pub const CREATE_NOTE: &str = "create_note";
/// Tool name: replace an existing note's content.
pub const UPDATE_NOTE: &str = "update_note";
/// Tool name: remove a note.
pub const DELETE_NOTE: &str = "delete_note";
/// Tool name: uniform random integer.
pub const RANDOM_NUMBER: &str = "random_number";
/// Tool name: string transformations.
pub const TRANSFORM_TEXT: &str = "transform_text";

/// Prompt name: summarise every stored note.
pub const SUMMARIZE_NOTES: &str = "summarize_notes";
/// Prompt name: step-by-step maths help.
pub const MATH_TUTOR: &str = "math_tutor";
/// Prompt name: note management help.
pub const NOTE_ASSISTANT: &str = "note_assistant";

/// Declarative description of one tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    /// Unique tool name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// JSON Schema (`type: object`) of the accepted arguments.
    pub input_schema: serde_json::Value,
}

/// One named prompt argument.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromptArgumentDescriptor {
    /// Argument name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether rendering fails without it.
    pub required: bool,
}

/// Declarative description of one prompt template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromptDescriptor {
    /// Unique prompt name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Ordered argument list.
    pub arguments: Vec<PromptArgumentDescriptor>,
}

impl PromptDescriptor {
    /// Names of the arguments marked required, in declaration order.
    pub fn required_arguments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.arguments
            .iter()
            .filter(|arg| arg.required)
            .map(|arg| arg.name)
    }
}

/// Every tool the server exposes, in listing order.
#[allow(clippy::too_many_lines)] // Tool definitions are intentionally verbose for clarity.
#[must_use]
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: CALCULATE,
            description: "Performs basic arithmetic operations (add, subtract, multiply, divide)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "operation": {
                        "type": "string",
                        "enum": ["add", "subtract", "multiply", "divide"],
                        "description": "The arithmetic operation to perform"
                    },
                    "a": { "type": "number", "description": "First number" },
                    "b": { "type": "number", "description": "Second number" }
                },
                "required": ["operation", "a", "b"]
            }),
        },
        ToolDescriptor {
            name: CREATE_NOTE,
            description: "Creates a new note with a given ID and content",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Unique identifier for the note" },
                    "content": { "type": "string", "description": "The content of the note" }
                },
                "required": ["id", "content"]
            }),
        },
        ToolDescriptor {
            name: UPDATE_NOTE,
            description: "Updates an existing note's content",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "ID of the note to update" },
                    "content": { "type": "string", "description": "New content for the note" }
                },
                "required": ["id", "content"]
            }),
        },
        ToolDescriptor {
            name: DELETE_NOTE,
            description: "Deletes a note by its ID",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "ID of the note to delete" }
                },
                "required": ["id"]
            }),
        },
        ToolDescriptor {
            name: RANDOM_NUMBER,
            description: "Generates a random number between min and max (inclusive)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "min": { "type": "number", "description": "Minimum value (default: 0)", "default": 0 },
                    "max": { "type": "number", "description": "Maximum value (default: 100)", "default": 100 }
                }
            }),
        },
        ToolDescriptor {
            name: TRANSFORM_TEXT,
            description: "Transforms text using various operations (uppercase, lowercase, reverse, word_count)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "The text to transform" },
                    "operation": {
                        "type": "string",
                        "enum": ["uppercase", "lowercase", "reverse", "word_count"],
                        "description": "The transformation to apply"
                    }
                },
                "required": ["text", "operation"]
            }),
        },
    ]
}

/// Every prompt the server exposes, in listing order.
#[must_use]
pub fn prompt_descriptors() -> Vec<PromptDescriptor> {
    vec![
        PromptDescriptor {
            name: SUMMARIZE_NOTES,
            description: "Creates a summary of all notes in the system",
            arguments: Vec::new(),
        },
        PromptDescriptor {
            name: MATH_TUTOR,
            description: "Get help solving a math problem using the calculator",
            arguments: vec![PromptArgumentDescriptor {
                name: "problem",
                description: "The math problem to solve",
                required: true,
            }],
        },
        PromptDescriptor {
            name: NOTE_ASSISTANT,
            description: "Get help managing your notes",
            arguments: vec![PromptArgumentDescriptor {
                name: "task",
                description: "What you want to do with notes (e.g., 'create a todo list', 'organize ideas')",
                required: true,
            }],
        },
    ]
}

/// Look up a prompt descriptor by name.
#[must_use]
pub fn find_prompt(name: &str) -> Option<PromptDescriptor> {
    prompt_descriptors().into_iter().find(|p| p.name == name)
}

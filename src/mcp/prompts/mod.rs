//! MCP prompt templates.
//!
//! Rendering is a pure function of the prompt descriptor, the supplied
//! arguments, and a read-only view of the note store.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::mcp::schema::{self, PromptDescriptor};
use crate::store::NoteStore;
use crate::{AppError, Result};

pub mod templates;

/// Speaker of a rendered prompt message.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The end user.
    User,
}

/// Content of a rendered prompt message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    /// Plain text.
    Text {
        /// The rendered text.
        text: String,
    },
}

/// A single rendered message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromptMessage {
    /// Who speaks the message.
    pub role: Role,
    /// What is said.
    pub content: MessageContent,
}

impl PromptMessage {
    /// A user-role text message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text { text: text.into() },
        }
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.content {
            MessageContent::Text { text } => text,
        }
    }
}

/// The result of rendering a prompt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedPrompt {
    /// The prompt's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered message sequence.
    pub messages: Vec<PromptMessage>,
}

/// The static prompt registry.
#[must_use]
pub fn list_prompts() -> Vec<PromptDescriptor> {
    schema::prompt_descriptors()
}

/// Render the prompt `name` with `arguments` against the current store.
///
/// # Errors
///
/// Returns `AppError::UnknownCapability` for an unregistered name and
/// `AppError::Validation` if a required argument is missing or not a string.
pub fn get_prompt(
    store: &NoteStore,
    name: &str,
    arguments: Option<&Map<String, Value>>,
) -> Result<RenderedPrompt> {
    let descriptor = schema::find_prompt(name).ok_or_else(|| AppError::unknown_prompt(name))?;
    let empty = Map::new();
    let args = PromptArgs {
        prompt: descriptor.name,
        values: arguments.unwrap_or(&empty),
    };
    for required in descriptor.required_arguments() {
        args.string(required)?;
    }

    let text = match descriptor.name {
        schema::SUMMARIZE_NOTES => templates::summarize_notes(store),
        schema::MATH_TUTOR => templates::math_tutor(args.string("problem")?),
        schema::NOTE_ASSISTANT => templates::note_assistant(store, args.string("task")?),
        other => return Err(AppError::unknown_prompt(other)),
    };

    debug!(prompt = name, "prompt rendered");
    Ok(RenderedPrompt {
        description: Some(descriptor.description.to_owned()),
        messages: vec![PromptMessage::user(text)],
    })
}

/// Borrowed argument bag for one prompt.
struct PromptArgs<'a> {
    prompt: &'static str,
    values: &'a Map<String, Value>,
}

impl<'a> PromptArgs<'a> {
    fn string(&self, key: &str) -> Result<&'a str> {
        match self.values.get(key) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(AppError::Validation(format!(
                "{}: argument `{key}` must be a string",
                self.prompt
            ))),
            None => Err(AppError::Validation(format!(
                "{}: missing required argument `{key}`",
                self.prompt
            ))),
        }
    }
}

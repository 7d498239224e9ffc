//! MCP tool handlers and the dispatcher that routes calls to them.
//!
//! An incoming argument bag is first narrowed into a typed [`ToolCall`]; only
//! then does anything touch the note store. Every failure, including an
//! unknown tool name, comes back as a flagged [`CallToolResult`] rather than a
//! protocol error.

use std::sync::Arc;

use rand::Rng;
use rmcp::model::{CallToolResult, Content, Tool};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::mcp::schema::{self, ToolDescriptor};
use crate::store::NoteStore;
use crate::{AppError, Result};

pub mod calculate;
pub mod create_note;
pub mod delete_note;
pub mod random_number;
pub mod transform_text;
pub mod update_note;

/// A tool invocation with its arguments narrowed to the tool's input type.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    /// `calculate`
    Calculate(calculate::CalculateInput),
    /// `create_note`
    CreateNote(create_note::CreateNoteInput),
    /// `update_note`
    UpdateNote(update_note::UpdateNoteInput),
    /// `delete_note`
    DeleteNote(delete_note::DeleteNoteInput),
    /// `random_number`
    RandomNumber(random_number::RandomNumberInput),
    /// `transform_text`
    TransformText(transform_text::TransformTextInput),
}

impl ToolCall {
    /// Resolve `name` against the registry and deserialize `arguments` into
    /// that tool's input type.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownCapability` for an unregistered name and
    /// `AppError::Validation` when the arguments do not fit the schema.
    pub fn parse(name: &str, arguments: Option<Map<String, Value>>) -> Result<Self> {
        let args = arguments.unwrap_or_default();
        let call = match name {
            schema::CALCULATE => Self::Calculate(narrow(name, args)?),
            schema::CREATE_NOTE => Self::CreateNote(narrow(name, args)?),
            schema::UPDATE_NOTE => Self::UpdateNote(narrow(name, args)?),
            schema::DELETE_NOTE => Self::DeleteNote(narrow(name, args)?),
            schema::RANDOM_NUMBER => Self::RandomNumber(narrow(name, args)?),
            schema::TRANSFORM_TEXT => Self::TransformText(narrow(name, args)?),
            other => return Err(AppError::unknown_tool(other)),
        };
        Ok(call)
    }

    /// Registry name of the tool this call targets.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Calculate(_) => schema::CALCULATE,
            Self::CreateNote(_) => schema::CREATE_NOTE,
            Self::UpdateNote(_) => schema::UPDATE_NOTE,
            Self::DeleteNote(_) => schema::DELETE_NOTE,
            Self::RandomNumber(_) => schema::RANDOM_NUMBER,
            Self::TransformText(_) => schema::TRANSFORM_TEXT,
        }
    }

    /// Run the call, returning the human-readable outcome text.
    ///
    /// # Errors
    ///
    /// Propagates the tool's own failure (conflict, not found, domain, or
    /// unknown operation).
    pub fn execute<R: Rng + ?Sized>(self, store: &mut NoteStore, rng: &mut R) -> Result<String> {
        match self {
            Self::Calculate(input) => calculate::run(&input),
            Self::CreateNote(input) => create_note::run(store, input),
            Self::UpdateNote(input) => update_note::run(store, input),
            Self::DeleteNote(input) => delete_note::run(store, &input),
            Self::RandomNumber(input) => random_number::run(&input, rng),
            Self::TransformText(input) => transform_text::run(&input),
        }
    }
}

/// Deserialize an argument bag into a tool's typed input.
fn narrow<T: DeserializeOwned>(tool: &str, args: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(args))
        .map_err(|err| AppError::Validation(format!("{tool}: {err}")))
}

/// Execute a tool call and wrap the outcome in a result envelope.
///
/// Success yields `{content: [text]}`; any failure yields the same shape with
/// `isError` set and the message prefixed by `Error: `.
pub fn dispatch<R: Rng + ?Sized>(
    store: &mut NoteStore,
    rng: &mut R,
    name: &str,
    arguments: Option<Map<String, Value>>,
) -> CallToolResult {
    let outcome = ToolCall::parse(name, arguments).and_then(|call| {
        let tool = call.name();
        call.execute(store, rng).map(|text| (tool, text))
    });
    match outcome {
        Ok((tool, text)) => {
            info!(tool, "tool call succeeded");
            CallToolResult::success(vec![Content::text(text)])
        }
        Err(err) => {
            warn!(tool = name, %err, "tool call failed");
            CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
        }
    }
}

/// Convert a `serde_json::Value::Object` into the `Arc<Map>` expected by `Tool`.
fn object_schema(value: Value) -> Arc<Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(Map::default()),
    }
}

/// The full tool registry as protocol descriptors.
#[must_use]
pub fn list_tools() -> Vec<Tool> {
    schema::tool_descriptors()
        .into_iter()
        .map(
            |ToolDescriptor {
                 name,
                 description,
                 input_schema,
             }| Tool::new(name, description, object_schema(input_schema)),
        )
        .collect()
}

//! MCP server handler and shared application state.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult, Implementation,
    ListPromptsResult, ListResourcesResult, ListToolsResult, PaginatedRequestParam, Prompt,
    ReadResourceRequestParam, ReadResourceResult, Resource, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::sync::Mutex;
use tracing::{info_span, warn, Instrument};

use crate::config::GlobalConfig;
use crate::mcp::prompts::{self, RenderedPrompt};
use crate::mcp::resources::notes::{self as note_resources, ResourceContent, ResourceDescriptor};
use crate::mcp::tools;
use crate::store::NoteStore;
use crate::Result;

const INSTRUCTIONS: &str = "Notes server. Tools: calculate, create_note, update_note, \
     delete_note, random_number, transform_text. Resources: note:///{id} for one note, \
     note:///all for every note as JSON. Prompts: summarize_notes, math_tutor, note_assistant.";

/// Shared application state accessible by all MCP handlers.
pub struct AppState {
    /// Global configuration.
    pub config: Arc<GlobalConfig>,
    /// The note store. Every handler holds the lock for its whole body, so
    /// requests touch the store strictly one at a time.
    pub notes: Mutex<NoteStore>,
}

impl AppState {
    /// Build state with a store seeded from `config.seed_notes`.
    #[must_use]
    pub fn new(config: GlobalConfig) -> Self {
        let notes = NoteStore::seeded(&config.seed_notes);
        Self {
            config: Arc::new(config),
            notes: Mutex::new(notes),
        }
    }
}

/// MCP server exposing the note tools, note resources, and prompt templates.
#[derive(Clone)]
pub struct NotesServer {
    state: Arc<AppState>,
}

impl NotesServer {
    /// Create a new MCP server bound to shared application state.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Access the shared application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Execute a tool call against the store.
    ///
    /// Never fails: errors are reported inside the returned envelope.
    pub async fn invoke_tool(&self, name: &str, arguments: Option<Map<String, Value>>) -> CallToolResult {
        let mut store = self.state.notes.lock().await;
        tools::dispatch(&mut store, &mut rand::thread_rng(), name, arguments)
    }

    /// List resources from the store as it is right now.
    pub async fn resource_list(&self) -> Vec<ResourceDescriptor> {
        let store = self.state.notes.lock().await;
        note_resources::list_resources(&store)
    }

    /// Read one resource by URI.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownCapability` for a non-`note:///` URI and
    /// `AppError::NotFound` for a missing note.
    pub async fn resource_read(&self, uri: &str) -> Result<ResourceContent> {
        let store = self.state.notes.lock().await;
        note_resources::read_resource(&store, uri)
    }

    /// Render a prompt against the store as it is right now.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownCapability` for an unknown prompt and
    /// `AppError::Validation` for missing required arguments.
    pub async fn prompt_get(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<RenderedPrompt> {
        let store = self.state.notes.lock().await;
        prompts::get_prompt(&store, name, arguments)
    }
}

/// Re-shape a crate-side value into its `rmcp` model type through the shared
/// JSON wire format.
fn to_wire<T: DeserializeOwned>(value: impl Serialize) -> std::result::Result<T, rmcp::ErrorData> {
    serde_json::to_value(value)
        .and_then(serde_json::from_value)
        .map_err(|err| rmcp::ErrorData::internal_error(format!("wire conversion failed: {err}"), None))
}

impl ServerHandler for NotesServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name.clone_from(&self.state.config.server_name);
        server_info.version = env!("CARGO_PKG_VERSION").to_owned();

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info,
            instructions: Some(INSTRUCTIONS.into()),
            ..ServerInfo::default()
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<CallToolResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("call_tool", tool = %request.name);

        async move { Ok(self.invoke_tool(&request.name, request.arguments).await) }.instrument(span)
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListToolsResult, rmcp::ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(tools::list_tools())))
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListResourcesResult, rmcp::ErrorData>> + Send + '_ {
        async move {
            let resources: Vec<Resource> = to_wire(self.resource_list().await)?;
            Ok(ListResourcesResult::with_all_items(resources))
        }
        .instrument(info_span!("list_resources"))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ReadResourceResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("read_resource", uri = %request.uri);

        async move {
            let content = self.resource_read(&request.uri).await.map_err(|err| {
                warn!(%err, "resource read failed");
                rmcp::ErrorData::from(err)
            })?;
            to_wire(json!({ "contents": [content] }))
        }
        .instrument(span)
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListPromptsResult, rmcp::ErrorData>> + Send + '_ {
        std::future::ready(
            to_wire::<Vec<Prompt>>(prompts::list_prompts()).map(ListPromptsResult::with_all_items),
        )
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<GetPromptResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("get_prompt", prompt = %request.name);

        async move {
            let rendered = self
                .prompt_get(&request.name, request.arguments.as_ref())
                .await
                .map_err(|err| {
                    warn!(%err, "prompt rendering failed");
                    rmcp::ErrorData::from(err)
                })?;
            to_wire(rendered)
        }
        .instrument(span)
    }
}

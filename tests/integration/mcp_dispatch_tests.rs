//! Integration tests for MCP dispatch through the Streamable HTTP transport.
//!
//! Every request is a JSON-RPC POST to `/mcp`; the `Mcp-Session-Id` header
//! returned by `initialize` rides along on every later request. These tests
//! cover the protocol layer: wire shapes of listings, reads and rendered
//! prompts, and which JSON-RPC error code each failure surfaces as.

use std::sync::Arc;

use notes_mcp::config::GlobalConfig;
use notes_mcp::mcp::handler::AppState;
use notes_mcp::mcp::http;
use rmcp::model::ErrorCode;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

// ── Server fixture ───────────────────────────────────────────

/// Serve the HTTP router on an ephemeral port.
///
/// Caller cancels `ct` when done. Returns `(base_url, ct)`.
async fn spawn_test_server() -> (String, CancellationToken) {
    let state = Arc::new(AppState::new(GlobalConfig::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral bind");
    let addr = listener.local_addr().expect("local addr");

    let ct = CancellationToken::new();
    let server_ct = ct.clone();
    tokio::spawn(async move {
        let _ = axum::serve(listener, http::router(state))
            .with_graceful_shutdown(server_ct.cancelled_owned())
            .await;
    });

    (format!("http://{addr}"), ct)
}

// ── Minimal Streamable-HTTP client ───────────────────────────

struct McpConnection {
    mcp_url: String,
    session_id: Option<String>,
    client: reqwest::Client,
    next_id: u64,
}

impl McpConnection {
    fn new(base_url: &str) -> Self {
        Self {
            mcp_url: format!("{base_url}/mcp"),
            session_id: None,
            client: reqwest::Client::new(),
            next_id: 1,
        }
    }

    /// `initialize` + `notifications/initialized`. Returns the `initialize`
    /// response.
    async fn handshake(&mut self) -> Value {
        let response = self
            .request(
                "initialize",
                json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "notes-test", "version": "0.0.1" }
                }),
            )
            .await;
        self.notify("notifications/initialized").await;
        response
    }

    fn post(&self, body: &Value) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .post(&self.mcp_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json, text/event-stream")
            .body(serde_json::to_string(body).expect("serialize JSON-RPC"));
        if let Some(sid) = &self.session_id {
            req = req.header("mcp-session-id", sid.clone());
        }
        req
    }

    /// Send a request and return the full JSON-RPC response object.
    async fn request(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;
        let body = json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params });

        let response = self.post(&body).send().await.expect("POST /mcp");
        if let Some(sid) = response.headers().get("mcp-session-id") {
            self.session_id = sid.to_str().ok().map(ToOwned::to_owned);
        }
        let text = response.text().await.expect("response body");
        parse_rpc_body(&text)
    }

    async fn notify(&self, method: &str) {
        let body = json!({ "jsonrpc": "2.0", "method": method, "params": {} });
        let _ = self.post(&body).send().await;
    }
}

/// The body is plain JSON or an event stream; in the latter case the reply is
/// the first `data:` line holding a JSON-RPC object.
fn parse_rpc_body(text: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return value;
    }
    text.lines()
        .filter_map(|line| line.strip_prefix("data:").map(str::trim))
        .filter_map(|data| serde_json::from_str::<Value>(data).ok())
        .find(|value| value.get("jsonrpc").is_some())
        .unwrap_or(Value::Null)
}

fn error_code(response: &Value) -> Option<i64> {
    response["error"]["code"].as_i64()
}

// ── initialize ───────────────────────────────────────────────

#[tokio::test]
async fn initialize_advertises_name_and_capabilities() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);

    let response = conn.handshake().await;
    let result = &response["result"];
    assert_eq!(result["serverInfo"]["name"], "learning-mcp-server");
    let capabilities = &result["capabilities"];
    assert!(capabilities.get("tools").is_some(), "{capabilities}");
    assert!(capabilities.get("resources").is_some(), "{capabilities}");
    assert!(capabilities.get("prompts").is_some(), "{capabilities}");

    ct.cancel();
}

// ── resources ────────────────────────────────────────────────

#[tokio::test]
async fn resources_list_has_wire_shape() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn.request("resources/list", json!({})).await;
    let resources = response["result"]["resources"]
        .as_array()
        .expect("resources array");
    assert_eq!(resources.len(), 2);

    assert_eq!(resources[0]["uri"], "note:///welcome");
    assert_eq!(resources[0]["name"], "Note: welcome");
    assert_eq!(resources[0]["mimeType"], "text/plain");
    assert!(resources[0]["description"]
        .as_str()
        .expect("description")
        .starts_with("A note with ID \"welcome\" (created: "));

    assert_eq!(resources[1]["uri"], "note:///all");
    assert_eq!(resources[1]["name"], "All Notes");
    assert_eq!(resources[1]["mimeType"], "application/json");

    ct.cancel();
}

#[tokio::test]
async fn reading_aggregate_returns_json_text_contents() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn
        .request("resources/read", json!({ "uri": "note:///all" }))
        .await;
    let contents = response["result"]["contents"]
        .as_array()
        .expect("contents array");
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["uri"], "note:///all");
    assert_eq!(contents[0]["mimeType"], "application/json");

    let notes: Value =
        serde_json::from_str(contents[0]["text"].as_str().expect("text")).expect("json");
    assert_eq!(notes[0]["id"], "welcome");
    assert!(notes[0]["createdAt"].as_str().is_some());
    assert!(notes[0]["updatedAt"].as_str().is_some());

    ct.cancel();
}

#[tokio::test]
async fn reading_missing_note_is_resource_not_found() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn
        .request("resources/read", json!({ "uri": "note:///missing" }))
        .await;
    assert_eq!(
        error_code(&response),
        Some(i64::from(ErrorCode::RESOURCE_NOT_FOUND.0)),
        "{response}"
    );
    assert_eq!(
        response["error"]["message"],
        "Note with ID \"missing\" not found"
    );

    ct.cancel();
}

#[tokio::test]
async fn reading_foreign_scheme_is_invalid_params() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn
        .request("resources/read", json!({ "uri": "bogus://x" }))
        .await;
    assert_eq!(
        error_code(&response),
        Some(i64::from(ErrorCode::INVALID_PARAMS.0)),
        "{response}"
    );

    ct.cancel();
}

// ── prompts ──────────────────────────────────────────────────

#[tokio::test]
async fn prompts_list_has_wire_shape() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn.request("prompts/list", json!({})).await;
    let prompts = response["result"]["prompts"]
        .as_array()
        .expect("prompts array");
    let names: Vec<&str> = prompts.iter().filter_map(|p| p["name"].as_str()).collect();
    assert_eq!(names, ["summarize_notes", "math_tutor", "note_assistant"]);

    let task = &prompts[2]["arguments"][0];
    assert_eq!(task["name"], "task");
    assert_eq!(task["required"], true);

    ct.cancel();
}

#[tokio::test]
async fn prompts_get_renders_user_text_message() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn
        .request(
            "prompts/get",
            json!({ "name": "note_assistant", "arguments": { "task": "plan a trip" } }),
        )
        .await;
    let result = &response["result"];
    assert_eq!(result["description"], "Get help managing your notes");
    let message = &result["messages"][0];
    assert_eq!(message["role"], "user");
    assert_eq!(message["content"]["type"], "text");
    let text = message["content"]["text"].as_str().expect("text");
    assert!(text.contains("plan a trip"));
    assert!(text.contains("Current notes: welcome"));

    ct.cancel();
}

#[tokio::test]
async fn prompts_get_failures_are_invalid_params() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let unknown = conn
        .request("prompts/get", json!({ "name": "sonnet" }))
        .await;
    assert_eq!(
        error_code(&unknown),
        Some(i64::from(ErrorCode::INVALID_PARAMS.0)),
        "{unknown}"
    );

    let missing_task = conn
        .request(
            "prompts/get",
            json!({ "name": "note_assistant", "arguments": {} }),
        )
        .await;
    assert_eq!(
        error_code(&missing_task),
        Some(i64::from(ErrorCode::INVALID_PARAMS.0)),
        "{missing_task}"
    );

    ct.cancel();
}

// ── tools ────────────────────────────────────────────────────

#[tokio::test]
async fn tools_call_mutation_is_visible_to_resources() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let created = conn
        .request(
            "tools/call",
            json!({ "name": "create_note", "arguments": { "id": "todo", "content": "buy milk" } }),
        )
        .await;
    assert!(created.get("error").is_none(), "{created}");
    assert_eq!(
        created["result"]["content"][0]["text"],
        "Note \"todo\" created successfully"
    );
    assert_ne!(created["result"]["isError"], true);

    let read = conn
        .request("resources/read", json!({ "uri": "note:///todo" }))
        .await;
    assert_eq!(read["result"]["contents"][0]["text"], "buy milk");
    assert_eq!(read["result"]["contents"][0]["mimeType"], "text/plain");

    ct.cancel();
}

#[tokio::test]
async fn tools_call_failure_is_flagged_result_not_rpc_error() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn
        .request("tools/call", json!({ "name": "launch_rocket", "arguments": {} }))
        .await;
    assert!(response.get("error").is_none(), "{response}");
    assert_eq!(response["result"]["isError"], true);
    assert_eq!(
        response["result"]["content"][0]["text"],
        "Error: Unknown tool: launch_rocket"
    );

    ct.cancel();
}

#[tokio::test]
async fn tools_list_returns_six_tools() {
    let (base_url, ct) = spawn_test_server().await;
    let mut conn = McpConnection::new(&base_url);
    conn.handshake().await;

    let response = conn.request("tools/list", json!({})).await;
    let tools = response["result"]["tools"].as_array().expect("tools array");
    assert_eq!(tools.len(), 6, "{tools:?}");
    assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));

    ct.cancel();
}

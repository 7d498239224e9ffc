//! MCP resource handlers.

pub mod notes;

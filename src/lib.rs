#![forbid(unsafe_code)]

//! Notes MCP server: note-taking tools, note resources, and prompt templates
//! over the Model Context Protocol, backed by an ephemeral in-memory store.

pub mod config;
pub mod errors;
pub mod mcp;
pub mod models;
pub mod store;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};

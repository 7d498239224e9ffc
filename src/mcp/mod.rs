//! Model Context Protocol server layer.

pub mod handler;
pub mod http;
pub mod prompts;
pub mod resources;
pub mod schema;
pub mod tools;
pub mod transport;

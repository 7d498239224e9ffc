//! Global configuration parsing and validation.

use std::collections::HashSet;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use serde::Deserialize;

use crate::{AppError, Result};

/// A note inserted into the store when the server starts.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SeedNote {
    /// Key of the seeded note.
    pub id: String,
    /// Initial content.
    pub content: String,
}

fn default_server_name() -> String {
    "learning-mcp-server".into()
}

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

fn default_http_port() -> u16 {
    3000
}

fn default_seed_notes() -> Vec<SeedNote> {
    vec![SeedNote {
        id: "welcome".into(),
        content: "Welcome to the Learning MCP Server! This is an example note.".into(),
    }]
}

/// Global configuration parsed from `config.toml`.
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Name advertised in the MCP `initialize` response.
    #[serde(default = "default_server_name")]
    pub server_name: String,
    /// Interface the HTTP transport binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Port for the Streamable HTTP transport.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Notes present in the store at startup.
    #[serde(default = "default_seed_notes")]
    pub seed_notes: Vec<SeedNote>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            bind_address: default_bind_address(),
            http_port: default_http_port(),
            seed_notes: default_seed_notes(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Socket address for the HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `bind_address` is not an IP address.
    pub fn http_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind_address.parse().map_err(|err| {
            AppError::Config(format!("bind_address '{}' invalid: {err}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.http_port))
    }

    fn validate(&self) -> Result<()> {
        if self.server_name.trim().is_empty() {
            return Err(AppError::Config("server_name must not be empty".into()));
        }

        self.http_addr()?;

        let mut seen = HashSet::new();
        for seed in &self.seed_notes {
            if seed.id.is_empty() {
                return Err(AppError::Config("seed note id must not be empty".into()));
            }
            if !seen.insert(seed.id.as_str()) {
                return Err(AppError::Config(format!(
                    "duplicate seed note id '{}'",
                    seed.id
                )));
            }
        }

        Ok(())
    }
}

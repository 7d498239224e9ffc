//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Capability surface named by an [`AppError::UnknownCapability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// A tool name absent from the tool registry.
    Tool,
    /// A prompt name absent from the prompt registry.
    Prompt,
    /// A resource URI outside the `note:///` scheme.
    UriScheme,
}

/// Application error enumeration covering all domain failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Transport startup or serve failure.
    Transport(String),
    /// File-system or I/O operation failure.
    Io(String),
    /// A response body could not be encoded.
    Serialization(String),
    /// Arguments missing or of the wrong shape for the declared schema.
    Validation(String),
    /// A note with this id already exists.
    Conflict(String),
    /// No note with this id exists.
    NotFound(String),
    /// The operation is well-formed but has no defined result.
    Domain(String),
    /// An operation enum value the tool does not recognise.
    UnknownOperation(String),
    /// An unrecognised tool or prompt name, or an unsupported URI scheme.
    UnknownCapability {
        /// Which surface rejected the request.
        capability: Capability,
        /// The offending name or URI.
        name: String,
    },
}

impl AppError {
    /// Build an [`AppError::UnknownCapability`] for an unregistered tool.
    #[must_use]
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownCapability {
            capability: Capability::Tool,
            name: name.into(),
        }
    }

    /// Build an [`AppError::UnknownCapability`] for an unregistered prompt.
    #[must_use]
    pub fn unknown_prompt(name: impl Into<String>) -> Self {
        Self::UnknownCapability {
            capability: Capability::Prompt,
            name: name.into(),
        }
    }

    /// Build an [`AppError::UnknownCapability`] for a URI outside `note:///`.
    #[must_use]
    pub fn unsupported_scheme(uri: impl Into<String>) -> Self {
        Self::UnknownCapability {
            capability: Capability::UriScheme,
            name: uri.into(),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Transport(msg) => write!(f, "transport: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization: {msg}"),
            Self::Validation(msg) => write!(f, "invalid arguments: {msg}"),
            Self::Conflict(id) => write!(f, "Note with ID \"{id}\" already exists"),
            Self::NotFound(id) => write!(f, "Note with ID \"{id}\" not found"),
            Self::Domain(msg) => f.write_str(msg),
            Self::UnknownOperation(op) => write!(f, "Unknown operation: {op}"),
            Self::UnknownCapability { capability, name } => match capability {
                Capability::Tool => write!(f, "Unknown tool: {name}"),
                Capability::Prompt => write!(f, "Unknown prompt: {name}"),
                Capability::UriScheme => write!(f, "Unsupported URI scheme: {name}"),
            },
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Protocol-level mapping used where no result envelope can carry the failure
/// (resource reads and prompt retrieval).
impl From<AppError> for rmcp::ErrorData {
    fn from(err: AppError) -> Self {
        let message = err.to_string();
        match err {
            AppError::NotFound(_) => Self::resource_not_found(message, None),
            AppError::Validation(_)
            | AppError::UnknownOperation(_)
            | AppError::UnknownCapability { .. } => Self::invalid_params(message, None),
            AppError::Config(_)
            | AppError::Transport(_)
            | AppError::Io(_)
            | AppError::Serialization(_)
            | AppError::Conflict(_)
            | AppError::Domain(_) => Self::internal_error(message, None),
        }
    }
}

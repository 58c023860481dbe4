//! Error types for the GPS-14 core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command client errors.
///
/// Every failed request surfaces exactly one of these. None of them carry
/// partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Bad credentials or an unexpected login response shape.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A command was issued before any session token was set.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Network failure, timeout, or non-2xx status.
    #[error("{message}")]
    Request {
        status: Option<u16>,
        message: String,
    },

    /// The login response body could not be read.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Whether a caller may reasonably try the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Request { .. })
    }

    pub(crate) fn request(status: Option<u16>, message: impl Into<String>) -> Self {
        ClientError::Request {
            status,
            message: message.into(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage directory: {0}")]
    DirectoryAccess(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

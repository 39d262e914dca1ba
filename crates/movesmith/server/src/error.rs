//! Error types for movesmith-server

use thiserror::Error;

/// Server-level errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server runtime error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;

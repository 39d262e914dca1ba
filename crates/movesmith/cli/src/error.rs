//! CLI error types

use movesmith_server::ServerError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Web shell failure
    #[error(transparent)]
    Server(#[from] ServerError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

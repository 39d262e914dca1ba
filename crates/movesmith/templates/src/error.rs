//! Error types for the template catalog.

use thiserror::Error;

/// Errors raised by catalog registration and lookup by pattern id.
///
/// Generating by intent never fails; these only come from the explicit
/// pattern-id surface.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template with this pattern id is already registered.
    #[error("duplicate template pattern: {0}")]
    DuplicatePattern(String),

    /// No template is registered under this pattern id.
    #[error("unknown template pattern: {0}")]
    UnknownPattern(String),
}

/// Result type for catalog operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

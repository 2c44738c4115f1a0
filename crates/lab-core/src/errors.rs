//! Cross-cutting error types for labtrack.
//!
//! Domain-specific errors (`ConfigError`, `SummarizeError`) live in their
//! respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any labtrack crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

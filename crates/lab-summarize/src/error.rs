//! Summarization error types.
//!
//! None of these reach callers of [`Summarizer::summarize`](crate::Summarizer);
//! the remote strategy converts every one into a local fallback. They surface
//! from the lower-level [`TextGenerator`](crate::TextGenerator) seam, the
//! status probe, and report-directory I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned a non-success status code, rate limiting (429)
    /// included.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, shortened, or the status reason when empty.
        message: String,
    },

    /// The response could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// A drafted record could not be built.
    #[error(transparent)]
    Core(#[from] lab_core::errors::CoreError),

    /// No API key is configured.
    #[error("remote summarization is not configured")]
    NotConfigured,

    /// Reading a report file or directory failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The report file pattern is not a valid glob.
    #[error("invalid report pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

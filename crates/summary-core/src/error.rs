//! Error types for summarization.

use thiserror::Error;

/// Errors that can occur while producing a summary.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The backing model is unavailable.
    #[error("summarizer unavailable: {0}")]
    Unavailable(String),

    /// The model rejected or failed on the input.
    #[error("summarization failed: {0}")]
    Failed(String),

    /// Network error talking to a remote model.
    #[error("network error: {0}")]
    Network(String),

    /// Invalid summarizer configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The summarization pass did not finish in time.
    #[error("summarization timed out")]
    Timeout,
}

//! The Summarizer trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SummarizerError;

/// Output bounds and decoding mode passed to an abstractive model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeParams {
    /// Upper bound on generated length, in model tokens.
    pub max_length: u32,
    /// Lower bound on generated length, in model tokens.
    pub min_length: u32,
    /// Sample during decoding. `false` means greedy, deterministic output.
    pub do_sample: bool,
}

impl Default for SummarizeParams {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            do_sample: false,
        }
    }
}

/// A model that condenses a bounded-length piece of text.
///
/// Implementations are created once at startup and shared across requests,
/// so they must be safe to call concurrently. Wrap a non-reentrant backend in
/// [`Serialized`](crate::Serialized).
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Condense `text`, which is already short enough for the model's input window.
    async fn summarize(
        &self,
        text: &str,
        params: &SummarizeParams,
    ) -> Result<String, SummarizerError>;

    /// Get a human-readable name for this summarizer.
    fn name(&self) -> &str;

    /// Check if the summarizer is ready to take requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

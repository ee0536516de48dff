//! Failing summarizer - every call returns an error.

use std::sync::atomic::{AtomicUsize, Ordering};

use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError};

/// A summarizer that always fails.
///
/// Counts calls so tests can assert that failures stop further work.
#[derive(Debug, Default)]
pub struct FailingSummarizer {
    message: String,
    calls: AtomicUsize,
}

impl FailingSummarizer {
    /// Create a summarizer failing with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of summarize calls seen so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _params: &SummarizeParams,
    ) -> Result<String, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SummarizerError::Failed(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingSummarizer"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

//! Delayed summarizer - wraps another summarizer with artificial delay.

use std::time::Duration;

use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError};
use tokio::time::sleep;

/// A summarizer that waits before delegating to another one.
///
/// Useful for testing timeout handling and simulating model latency.
pub struct DelayedSummarizer<S: Summarizer> {
    inner: S,
    delay: Duration,
}

impl<S: Summarizer> DelayedSummarizer<S> {
    /// Create a new DelayedSummarizer wrapping `inner` with the specified delay.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a summarizer with a delay in milliseconds.
    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Create a summarizer with a delay in seconds.
    pub fn with_secs(inner: S, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }
}

#[async_trait]
impl<S: Summarizer> Summarizer for DelayedSummarizer<S> {
    async fn summarize(
        &self,
        text: &str,
        params: &SummarizeParams,
    ) -> Result<String, SummarizerError> {
        sleep(self.delay).await;
        self.inner.summarize(text, params).await
    }

    fn name(&self) -> &str {
        "DelayedSummarizer"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}

//! Serialized access to a non-reentrant summarizer.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::SummarizerError;
use crate::summarizer::{SummarizeParams, Summarizer};

/// Wraps a summarizer so that only one call runs at a time.
///
/// Use this for backends that hold mutable model state and cannot be
/// invoked concurrently. Waiting callers queue on an async mutex.
pub struct Serialized<S: Summarizer> {
    inner: Mutex<S>,
    name: String,
}

impl<S: Summarizer> Serialized<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        let name = format!("Serialized({})", inner.name());
        Self {
            inner: Mutex::new(inner),
            name,
        }
    }
}

#[async_trait]
impl<S: Summarizer> Summarizer for Serialized<S> {
    async fn summarize(
        &self,
        text: &str,
        params: &SummarizeParams,
    ) -> Result<String, SummarizerError> {
        let inner = self.inner.lock().await;
        inner.summarize(text, params).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Asks the inner backend when it is idle. A call in flight means the
    /// backend is serving, so a busy lock reports ready instead of waiting.
    async fn is_ready(&self) -> bool {
        match self.inner.try_lock() {
            Ok(inner) => inner.is_ready().await,
            Err(_) => true,
        }
    }
}

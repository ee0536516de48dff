//! Echo summarizer - returns the chunk unchanged.

use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError};

/// A summarizer that echoes its input back.
///
/// Useful for checking chunk boundaries and merge order without a model.
#[derive(Debug, Clone, Default)]
pub struct EchoSummarizer {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoSummarizer {
    /// Create a new EchoSummarizer with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoSummarizer with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_summarizer::EchoSummarizer;
    ///
    /// let summarizer = EchoSummarizer::with_prefix("[");
    /// // Will respond with "[<chunk>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Summarizer for EchoSummarizer {
    async fn summarize(
        &self,
        text: &str,
        _params: &SummarizeParams,
    ) -> Result<String, SummarizerError> {
        Ok(match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, text),
            None => text.to_string(),
        })
    }

    fn name(&self) -> &str {
        "EchoSummarizer"
    }
}

//! Truncating summarizer - keeps the leading words of the chunk.

use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError};

/// A summarizer that keeps the first `max_length` whitespace-separated words.
///
/// Honors the output upper bound the way a real model would, which makes it
/// a reasonable stand-in when running the server without a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatingSummarizer;

impl TruncatingSummarizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Summarizer for TruncatingSummarizer {
    async fn summarize(
        &self,
        text: &str,
        params: &SummarizeParams,
    ) -> Result<String, SummarizerError> {
        Ok(text
            .split_whitespace()
            .take(params.max_length as usize)
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn name(&self) -> &str {
        "TruncatingSummarizer"
    }
}

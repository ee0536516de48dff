//! Summary engine: chunk, summarize each chunk, merge.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::chunker::{chunk, DEFAULT_CHUNK_LIMIT};
use crate::error::SummarizerError;
use crate::sentences::SentenceTokenizer;
use crate::summarizer::{SummarizeParams, Summarizer};

/// Number of leading sentences kept per chunk by the extractive strategy.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Upper bound on one abstractive summarization pass.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// How a chunk gets condensed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStrategy {
    /// Keep the leading sentences verbatim.
    Extractive,
    /// Let the model rewrite the chunk.
    Abstractive,
}

impl SummaryStrategy {
    /// Parse the strategy name sent by clients.
    ///
    /// Only `"extractive"` selects the extractive strategy; anything else,
    /// including a missing value, is abstractive.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("extractive") => Self::Extractive,
            _ => Self::Abstractive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Abstractive => "abstractive",
        }
    }
}

impl fmt::Display for SummaryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns a transcript of any length into a single summary.
///
/// The text is cut into chunks no longer than the model input window. Every
/// chunk is condensed on its own and the results are joined with single
/// spaces in chunk order. Any chunk failure fails the whole call.
#[derive(Clone)]
pub struct SummaryEngine {
    summarizer: Arc<dyn Summarizer>,
    tokenizer: SentenceTokenizer,
    chunk_limit: usize,
    sentence_count: usize,
    params: SummarizeParams,
    timeout: Duration,
}

impl SummaryEngine {
    /// Create an engine around the abstractive backend.
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        info!("SummaryEngine initialized with summarizer: {}", summarizer.name());

        Self {
            summarizer,
            tokenizer: SentenceTokenizer::new(),
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            sentence_count: DEFAULT_SENTENCE_COUNT,
            params: SummarizeParams::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the maximum chunk length in characters.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn with_chunk_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "chunk limit must be positive");
        self.chunk_limit = limit;
        self
    }

    /// Set how many sentences the extractive strategy keeps per chunk.
    pub fn with_sentence_count(mut self, count: usize) -> Self {
        self.sentence_count = count;
        self
    }

    /// Set the output bounds passed to the abstractive backend.
    pub fn with_params(mut self, params: SummarizeParams) -> Self {
        self.params = params;
        self
    }

    /// Set the time budget for an abstractive pass.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the tokenizer used by the extractive strategy.
    pub fn with_tokenizer(mut self, tokenizer: SentenceTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Name of the abstractive backend.
    pub fn summarizer_name(&self) -> &str {
        self.summarizer.name()
    }

    /// The injected abstractive backend.
    pub fn summarizer(&self) -> &Arc<dyn Summarizer> {
        &self.summarizer
    }

    pub fn chunk_limit(&self) -> usize {
        self.chunk_limit
    }

    /// Summarize `text` with the given strategy.
    pub async fn summarize(
        &self,
        text: &str,
        strategy: SummaryStrategy,
    ) -> Result<String, SummarizerError> {
        let chunks = chunk(text, self.chunk_limit);
        debug!(
            chars = text.chars().count(),
            chunks = chunks.len(),
            %strategy,
            "Summarizing text"
        );

        match strategy {
            SummaryStrategy::Extractive => Ok(chunks
                .iter()
                .map(|c| self.extractive_summary(c))
                .collect::<Vec<_>>()
                .join(" ")),
            SummaryStrategy::Abstractive => {
                tokio::time::timeout(self.timeout, self.abstractive(&chunks))
                    .await
                    .map_err(|_| {
                        warn!(
                            timeout_secs = self.timeout.as_secs_f64(),
                            summarizer = self.summarizer.name(),
                            "Abstractive summarization timed out"
                        );
                        SummarizerError::Timeout
                    })?
            }
        }
    }

    /// First sentences of `text`, joined by single spaces.
    pub fn extractive_summary(&self, text: &str) -> String {
        self.tokenizer
            .split(text)
            .into_iter()
            .take(self.sentence_count)
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn abstractive(&self, chunks: &[&str]) -> Result<String, SummarizerError> {
        let mut summaries = Vec::with_capacity(chunks.len());

        for (index, piece) in chunks.iter().enumerate() {
            let summary = self
                .summarizer
                .summarize(piece, &self.params)
                .await
                .map_err(|e| {
                    warn!(chunk = index, error = %e, "Chunk summarization failed");
                    e
                })?;
            summaries.push(summary);
        }

        Ok(summaries.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Returns a tag per call and records what it was given.
    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<(String, SummarizeParams)>>,
        fail_on: Option<usize>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl Summarizer for Recording {
        async fn summarize(
            &self,
            text: &str,
            params: &SummarizeParams,
        ) -> Result<String, SummarizerError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let call = {
                let mut seen = self.seen.lock().unwrap();
                seen.push((text.to_string(), *params));
                seen.len() - 1
            };
            if self.fail_on == Some(call) {
                return Err(SummarizerError::Failed("model error".to_string()));
            }
            Ok(format!("S{}", call))
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    fn engine(summarizer: Arc<Recording>) -> SummaryEngine {
        SummaryEngine::new(summarizer)
    }

    #[test]
    fn test_strategy_from_wire() {
        assert_eq!(SummaryStrategy::from_wire(Some("extractive")), SummaryStrategy::Extractive);
        assert_eq!(SummaryStrategy::from_wire(Some("Extractive ")), SummaryStrategy::Extractive);
        assert_eq!(SummaryStrategy::from_wire(Some("abstractive")), SummaryStrategy::Abstractive);
        assert_eq!(SummaryStrategy::from_wire(Some("bogus")), SummaryStrategy::Abstractive);
        assert_eq!(SummaryStrategy::from_wire(None), SummaryStrategy::Abstractive);
    }

    #[tokio::test]
    async fn test_extractive_keeps_first_three_sentences() {
        let engine = engine(Arc::new(Recording::default()));
        let summary = engine
            .summarize("A. B. C. D.", SummaryStrategy::Extractive)
            .await
            .unwrap();
        assert_eq!(summary, "A. B. C.");
    }

    #[tokio::test]
    async fn test_extractive_short_text_is_unchanged() {
        let engine = engine(Arc::new(Recording::default()));
        let summary = engine
            .summarize("We met.  We agreed.", SummaryStrategy::Extractive)
            .await
            .unwrap();
        assert_eq!(summary, "We met. We agreed.");
    }

    #[tokio::test]
    async fn test_extractive_does_not_call_summarizer() {
        let summarizer = Arc::new(Recording::default());
        let engine = engine(summarizer.clone());
        engine
            .summarize("One. Two.", SummaryStrategy::Extractive)
            .await
            .unwrap();
        assert!(summarizer.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extractive_runs_per_chunk() {
        let engine = engine(Arc::new(Recording::default())).with_chunk_limit(12);
        // chunks: "A. B. C. D. " and "E. F. G. H."
        let summary = engine
            .summarize("A. B. C. D. E. F. G. H.", SummaryStrategy::Extractive)
            .await
            .unwrap();
        assert_eq!(summary, "A. B. C. E. F. G.");
    }

    #[tokio::test]
    async fn test_custom_sentence_count() {
        let engine = engine(Arc::new(Recording::default())).with_sentence_count(1);
        let summary = engine
            .summarize("First. Second.", SummaryStrategy::Extractive)
            .await
            .unwrap();
        assert_eq!(summary, "First.");
    }

    #[tokio::test]
    async fn test_empty_text_gives_empty_summary() {
        let summarizer = Arc::new(Recording::default());
        let engine = engine(summarizer.clone());
        assert_eq!(engine.summarize("", SummaryStrategy::Extractive).await.unwrap(), "");
        assert_eq!(engine.summarize("", SummaryStrategy::Abstractive).await.unwrap(), "");
        assert!(summarizer.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_abstractive_merges_chunks_in_order() {
        let summarizer = Arc::new(Recording::default());
        let engine = engine(summarizer.clone()).with_chunk_limit(4);

        let summary = engine
            .summarize("aaaabbbbcc", SummaryStrategy::Abstractive)
            .await
            .unwrap();

        assert_eq!(summary, "S0 S1 S2");
        let seen = summarizer.seen.lock().unwrap();
        let inputs: Vec<&str> = seen.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(inputs, vec!["aaaa", "bbbb", "cc"]);
        assert!(seen.iter().all(|(_, p)| *p == SummarizeParams::default()));
    }

    #[tokio::test]
    async fn test_abstractive_passes_custom_params() {
        let summarizer = Arc::new(Recording::default());
        let params = SummarizeParams {
            max_length: 60,
            min_length: 10,
            do_sample: false,
        };
        let engine = engine(summarizer.clone()).with_params(params);

        engine
            .summarize("text", SummaryStrategy::Abstractive)
            .await
            .unwrap();

        assert_eq!(summarizer.seen.lock().unwrap()[0].1, params);
    }

    #[tokio::test]
    async fn test_abstractive_fails_fast() {
        let summarizer = Arc::new(Recording {
            fail_on: Some(1),
            ..Default::default()
        });
        let engine = engine(summarizer.clone()).with_chunk_limit(2);

        let result = engine
            .summarize("aabbccdd", SummaryStrategy::Abstractive)
            .await;

        assert!(matches!(result, Err(SummarizerError::Failed(_))));
        // Chunks after the failing one are never sent.
        assert_eq!(summarizer.seen.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abstractive_timeout() {
        let summarizer = Arc::new(Recording {
            delay: Some(Duration::from_secs(10)),
            ..Default::default()
        });
        let engine = engine(summarizer).with_timeout(Duration::from_secs(1));

        let result = engine
            .summarize("slow text", SummaryStrategy::Abstractive)
            .await;

        assert!(matches!(result, Err(SummarizerError::Timeout)));
    }

    #[test]
    #[should_panic(expected = "chunk limit must be positive")]
    fn test_zero_chunk_limit_panics() {
        let _ = engine(Arc::new(Recording::default())).with_chunk_limit(0);
    }
}

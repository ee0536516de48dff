//! Core trait and text utilities for meeting summarization.
//!
//! This crate provides everything between a raw transcript and the text that
//! gets stored:
//!
//! - [`chunk`] - Split text into bounded-length pieces for the model
//! - [`SentenceTokenizer`] - Rule-based sentence boundaries for extractive summaries
//! - [`bullets`] - Line-per-sentence bullet rendering of a transcript
//! - [`Summarizer`] - The trait every abstractive backend implements
//! - [`SummaryEngine`] - Chunking plus strategy dispatch plus merge
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError, SummaryEngine, SummaryStrategy};
//!
//! struct Shouty;
//!
//! #[async_trait]
//! impl Summarizer for Shouty {
//!     async fn summarize(&self, text: &str, _params: &SummarizeParams) -> Result<String, SummarizerError> {
//!         Ok(text.to_uppercase())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Shouty"
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), SummarizerError> {
//! let engine = SummaryEngine::new(Arc::new(Shouty));
//! let summary = engine.summarize("A. B. C. D.", SummaryStrategy::Extractive).await?;
//! assert_eq!(summary, "A. B. C.");
//! # Ok(())
//! # }
//! ```

mod bullets;
mod chunker;
mod engine;
mod error;
mod sentences;
mod serialized;
mod summarizer;

pub use bullets::{bullets, BULLET_MARKER};
pub use chunker::{chunk, CHUNK_SAFETY_MARGIN, DEFAULT_CHUNK_LIMIT, MODEL_INPUT_LIMIT};
pub use engine::{SummaryEngine, SummaryStrategy, DEFAULT_SENTENCE_COUNT, DEFAULT_TIMEOUT};
pub use error::SummarizerError;
pub use sentences::SentenceTokenizer;
pub use serialized::Serialized;
pub use summarizer::{SummarizeParams, Summarizer};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

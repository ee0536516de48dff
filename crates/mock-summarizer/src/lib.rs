//! Mock summarizer implementations.
//!
//! This crate provides mock implementations of the `Summarizer` trait for
//! tests and local development:
//! - `EchoSummarizer` - Returns the chunk unchanged
//! - `TruncatingSummarizer` - Keeps the first `max_length` words of the chunk
//! - `FailingSummarizer` - Always fails
//! - `DelayedSummarizer` - Wraps another summarizer with artificial delay
//!
//! For a real model, use the `hf-summarizer` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_summarizer::{EchoSummarizer, SummarizeParams, Summarizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_summarizer::SummarizerError> {
//!     let summarizer = EchoSummarizer::new();
//!     let summary = summarizer.summarize("Hello!", &SummarizeParams::default()).await?;
//!     assert_eq!(summary, "Hello!");
//!     Ok(())
//! }
//! ```

mod delayed;
mod echo;
mod failing;
mod truncating;

// Re-export summary-core types for convenience
pub use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError};

pub use delayed::DelayedSummarizer;
pub use echo::EchoSummarizer;
pub use failing::FailingSummarizer;
pub use truncating::TruncatingSummarizer;

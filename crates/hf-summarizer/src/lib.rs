//! Hugging Face inference summarizer.
//!
//! This crate provides a [`Summarizer`] that sends each chunk to a
//! text-summarization inference endpoint (the Hugging Face Inference API or
//! a self-hosted server speaking the same protocol).
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use hf_summarizer::HfSummarizer;
//! use summary_core::SummaryEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summarizer = HfSummarizer::from_env()?;
//!     let engine = SummaryEngine::new(Arc::new(summarizer));
//!     // Use the engine...
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod summarizer;

pub use config::HfSummarizerConfig;
pub use summarizer::HfSummarizer;

// Re-export summary-core types for convenience
pub use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError};

//! Inference API request and response types.

use serde::{Deserialize, Serialize};
use summary_core::SummarizeParams;

/// A summarization request.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizationRequest<'a> {
    /// Text to condense.
    pub inputs: &'a str,
    /// Generation parameters.
    pub parameters: GenerationParameters,
    /// Request options.
    pub options: RequestOptions,
}

/// Generation parameters understood by the summarization pipeline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl From<&SummarizeParams> for GenerationParameters {
    fn from(params: &SummarizeParams) -> Self {
        Self {
            max_length: params.max_length,
            min_length: params.min_length,
            do_sample: params.do_sample,
        }
    }
}

/// Request options.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestOptions {
    /// Block until the model is loaded instead of returning 503.
    pub wait_for_model: bool,
}

/// One summarization result.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationOutput {
    pub summary_text: String,
}

/// Error body returned by the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
    /// Seconds until the model is loaded, present on 503.
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

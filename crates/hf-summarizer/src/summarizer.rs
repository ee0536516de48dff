//! HfSummarizer implementation using an inference endpoint.

use reqwest::{Client, StatusCode};
use summary_core::{async_trait, SummarizeParams, Summarizer, SummarizerError};
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, GenerationParameters, RequestOptions, SummarizationOutput, SummarizationRequest,
};
use crate::config::HfSummarizerConfig;

/// A summarizer that posts each chunk to a summarization endpoint.
///
/// The HTTP client is built once and reused, so one instance can be shared
/// across all requests.
pub struct HfSummarizer {
    client: Client,
    config: HfSummarizerConfig,
    model_url: String,
}

impl HfSummarizer {
    /// Create a new HfSummarizer with the given configuration.
    pub fn new(config: HfSummarizerConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                SummarizerError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let model_url = config.model_url();
        info!("HfSummarizer initialized with model: {}", config.model);

        Ok(Self {
            client,
            config,
            model_url,
        })
    }

    /// Create an HfSummarizer from environment variables.
    ///
    /// See [`HfSummarizerConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::new(HfSummarizerConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &HfSummarizerConfig {
        &self.config
    }
}

#[async_trait]
impl Summarizer for HfSummarizer {
    async fn summarize(
        &self,
        text: &str,
        params: &SummarizeParams,
    ) -> Result<String, SummarizerError> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: GenerationParameters::from(params),
            options: RequestOptions {
                wait_for_model: self.config.wait_for_model,
            },
        };

        debug!(chars = text.len(), url = %self.model_url, "Sending summarization request");

        let mut builder = self.client.post(&self.model_url).json(&request);
        if let Some(ref token) = self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SummarizerError::Timeout
            } else {
                SummarizerError::Network(format!("Failed to send request: {}", e))
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let (message, estimated_time) = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => (api_error.error, api_error.estimated_time),
                Err(_) => (error_text, None),
            };

            return Err(if status == StatusCode::SERVICE_UNAVAILABLE {
                match estimated_time {
                    Some(secs) => {
                        warn!(
                            estimated_secs = secs,
                            model = %self.config.model,
                            "Model is loading"
                        );
                        SummarizerError::Unavailable(format!(
                            "{} (retry in ~{:.0}s)",
                            message, secs
                        ))
                    }
                    None => SummarizerError::Unavailable(message),
                }
            } else {
                SummarizerError::Failed(format!("API error ({}): {}", status.as_u16(), message))
            });
        }

        let outputs: Vec<SummarizationOutput> = response.json().await.map_err(|e| {
            SummarizerError::Failed(format!("Failed to parse response: {}", e))
        })?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text.trim().to_string())
            .ok_or_else(|| SummarizerError::Failed("Empty response from model".to_string()))
    }

    fn name(&self) -> &str {
        "HfSummarizer"
    }
}

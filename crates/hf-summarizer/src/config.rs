//! Configuration for HfSummarizer.

use std::env;
use std::time::Duration;

use summary_core::SummarizerError;

/// Default inference endpoint.
pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co";

/// Default summarization model.
pub const DEFAULT_MODEL: &str = "t5-small";

/// Configuration for HfSummarizer.
#[derive(Debug, Clone)]
pub struct HfSummarizerConfig {
    /// Inference API base URL.
    pub api_url: String,

    /// Bearer token, if the endpoint requires one.
    pub api_token: Option<String>,

    /// Model id appended to `/models/`.
    pub model: String,

    /// Ask the endpoint to wait for a cold model instead of failing.
    pub wait_for_model: bool,

    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl Default for HfSummarizerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            model: DEFAULT_MODEL.to_string(),
            wait_for_model: true,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl HfSummarizerConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HF_API_URL` - API URL (default: https://api-inference.huggingface.co)
    /// - `HF_API_TOKEN` - Bearer token (default: none)
    /// - `HF_MODEL` - Model id (default: t5-small)
    /// - `HF_WAIT_FOR_MODEL` - Wait for cold models (default: true)
    /// - `HF_REQUEST_TIMEOUT_SECS` - HTTP timeout per chunk (default: 60)
    pub fn from_env() -> Result<Self, SummarizerError> {
        let api_url = env::var("HF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(SummarizerError::Configuration(format!(
                "HF_API_URL must be an http(s) URL, got {}",
                api_url
            )));
        }

        let api_token = env::var("HF_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let model = env::var("HF_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let wait_for_model = env::var("HF_WAIT_FOR_MODEL")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(true);

        let request_timeout = env::var("HF_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(60));

        Ok(Self {
            api_url,
            api_token,
            model,
            wait_for_model,
            request_timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> HfSummarizerConfigBuilder {
        HfSummarizerConfigBuilder::default()
    }

    /// Full URL of the model endpoint.
    pub fn model_url(&self) -> String {
        format!("{}/models/{}", self.api_url.trim_end_matches('/'), self.model)
    }
}

/// Builder for HfSummarizerConfig.
#[derive(Debug, Default)]
pub struct HfSummarizerConfigBuilder {
    config: HfSummarizerConfig,
}

impl HfSummarizerConfigBuilder {
    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the bearer token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.config.api_token = Some(token.into());
        self
    }

    /// Set the model id.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set whether to wait for cold models.
    pub fn wait_for_model(mut self, wait: bool) -> Self {
        self.config.wait_for_model = wait;
        self
    }

    /// Set the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HfSummarizerConfig {
        self.config
    }
}

//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use database::DeletePolicy;

/// Which abstractive backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizerBackend {
    /// Hugging Face style inference endpoint.
    HuggingFace,
    /// Word-truncating stand-in, for local development without a model.
    Truncate,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Lifetime of an issued session token.
    pub jwt_ttl: Duration,
    /// Upper bound on one abstractive summarization.
    pub summarizer_timeout: Duration,
    /// Abstractive backend.
    pub summarizer_backend: SummarizerBackend,
    /// What deleting a summary does to its bullet points.
    pub delete_policy: DeletePolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `API_ADDR` | Server bind address | `127.0.0.1:5000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:meeting_notes.db?mode=rwc` |
    /// | `JWT_SECRET_KEY` | Token signing secret | (required) |
    /// | `JWT_TTL_HOURS` | Token lifetime in hours | `48` |
    /// | `SUMMARIZER_TIMEOUT_SECS` | Abstractive summarization budget | `120` |
    /// | `SUMMARIZER_BACKEND` | `hf` or `truncate` | `hf` |
    /// | `DELETE_CASCADE_BULLETS` | Delete bullets with their summary | `true` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:meeting_notes.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET_KEY")
            .ok()
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let jwt_ttl = parse_number("JWT_TTL_HOURS", 48)
            .map(|hours| Duration::from_secs(hours * 60 * 60))?;

        let summarizer_timeout =
            parse_number("SUMMARIZER_TIMEOUT_SECS", 120).map(Duration::from_secs)?;

        let summarizer_backend = match env::var("SUMMARIZER_BACKEND")
            .unwrap_or_else(|_| "hf".to_string())
            .to_lowercase()
            .as_str()
        {
            "hf" | "huggingface" => SummarizerBackend::HuggingFace,
            "truncate" => SummarizerBackend::Truncate,
            other => return Err(ConfigError::InvalidBackend(other.to_string())),
        };

        let delete_policy = match env::var("DELETE_CASCADE_BULLETS") {
            Ok(v) if v.to_lowercase() == "false" || v == "0" => DeletePolicy::SummaryOnly,
            _ => DeletePolicy::CascadeBullets,
        };

        Ok(Self {
            addr,
            database_url,
            jwt_secret,
            jwt_ttl,
            summarizer_timeout,
            summarizer_backend,
            delete_policy,
        })
    }
}

fn parse_number(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_ADDR format")]
    InvalidAddr,

    #[error("JWT_SECRET_KEY environment variable is required")]
    MissingJwtSecret,

    #[error("{var} must be a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Unknown SUMMARIZER_BACKEND {0:?} (expected hf or truncate)")]
    InvalidBackend(String),
}

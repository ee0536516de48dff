//! Meeting notes API server.

use std::sync::Arc;

use api::{AppState, Config, SessionIssuer, SummarizerBackend};
use database::Database;
use hf_summarizer::HfSummarizer;
use mock_summarizer::TruncatingSummarizer;
use summary_core::{Summarizer, SummaryEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting meeting notes API");

    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    let summarizer: Arc<dyn Summarizer> = match config.summarizer_backend {
        SummarizerBackend::HuggingFace => Arc::new(HfSummarizer::from_env()?),
        SummarizerBackend::Truncate => Arc::new(TruncatingSummarizer::new()),
    };
    info!(summarizer = summarizer.name(), "Summarizer ready");

    let engine = SummaryEngine::new(summarizer).with_timeout(config.summarizer_timeout);
    let sessions = SessionIssuer::new(&config.jwt_secret, config.jwt_ttl);
    let state = AppState::new(db, engine, sessions).with_delete_policy(config.delete_policy);

    let app = api::app(state);

    info!(addr = %config.addr, "Meeting notes API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

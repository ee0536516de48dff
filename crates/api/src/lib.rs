//! HTTP API for meeting transcript summaries.
//!
//! Users register and log in to receive a bearer token, then submit
//! transcripts for extractive or abstractive summarization. Summaries and
//! bullet points are stored per user under a user-chosen meeting id.

pub mod accounts;
pub mod auth;
pub mod config;
pub mod error;
pub mod meetings;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use crate::config::{Config, ConfigError, SummarizerBackend};
pub use crate::error::ApiError;
pub use crate::session::SessionIssuer;
pub use crate::state::AppState;

/// Build the application with its middleware.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

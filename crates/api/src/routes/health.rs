//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub summarizer: String,
    pub summarizer_ready: bool,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let summarizer = state.engine.summarizer();

    Json(Health {
        status: "ok".to_string(),
        summarizer: summarizer.name().to_string(),
        summarizer_ready: summarizer.is_ready().await,
    })
}

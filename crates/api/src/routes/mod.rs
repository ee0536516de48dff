//! HTTP routes.

pub mod accounts;
pub mod health;
pub mod meetings;

use axum::routing::{delete, get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Plain `{"msg": ...}` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub msg: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        // Accounts
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        // Meetings (bearer token required)
        .route("/get_next_meeting_id", get(meetings::next_meeting_id))
        .route("/get_summary", post(meetings::generate_summary))
        .route("/get_bullet_points", post(meetings::generate_bullets))
        .route("/get_summary_by_id", get(meetings::list_summaries))
        .route("/delete_summary/:meeting_id", delete(meetings::delete_summary))
}

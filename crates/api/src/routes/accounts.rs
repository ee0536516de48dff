//! Account routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::accounts::{self, LoginRequest, LoginResponse, RegisterRequest};
use crate::error::Result;
use crate::routes::Message;
use crate::state::AppState;

/// Create an account.
pub async fn register(
    State(state): State<AppState>,
    body: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>)> {
    let Json(request) = body?;
    accounts::register(&state, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(Message::new("User registered successfully")),
    ))
}

/// Log in and receive a session token.
pub async fn login(
    State(state): State<AppState>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = body?;
    Ok(Json(accounts::login(&state, request).await?))
}

//! Registration and login.

use database::{user, validation, DatabaseError, NewUser};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::session;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Create a user account.
pub async fn register(state: &AppState, request: RegisterRequest) -> Result<()> {
    let (Some(username), Some(email), Some(password)) =
        (request.username, request.email, request.password)
    else {
        return Err(ApiError::Validation("Missing fields".to_string()));
    };

    validation::validate_username(&username)?;
    validation::validate_email(&email)?;
    validation::validate_password(&password)?;

    let email = email.trim().to_string();
    let password_hash = session::hash_password(password).await?;

    let new_user = NewUser {
        username: username.trim().to_string(),
        email,
        password_hash,
    };

    user::create_user(state.db.pool(), &new_user)
        .await
        .map_err(|e| match e {
            DatabaseError::AlreadyExists { .. } => {
                ApiError::Conflict("User with this email already exists".to_string())
            }
            other => other.into(),
        })?;

    Ok(())
}

/// Verify credentials and issue a session token.
pub async fn login(state: &AppState, request: LoginRequest) -> Result<LoginResponse> {
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(ApiError::Validation("Missing fields".to_string()));
    };
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation("Missing fields".to_string()));
    }

    let stored = user::get_user_by_email(state.db.pool(), email.trim())
        .await
        .map_err(|e| match e {
            DatabaseError::NotFound { .. } => {
                ApiError::Unauthorized("User does not exist".to_string())
            }
            other => other.into(),
        })?;

    if !session::verify_password(password, stored.password).await? {
        info!(email = %stored.email, "Rejected login with bad credentials");
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let access_token = state.sessions.issue(&stored.email)?;
    info!(email = %stored.email, "User logged in");

    Ok(LoginResponse { access_token })
}

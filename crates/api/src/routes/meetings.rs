//! Meeting summary routes.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::meetings::{
    self, BulletRequest, BulletResponse, NextMeetingId, SummaryList, SummaryRequest,
    SummaryResponse,
};
use crate::routes::Message;
use crate::state::AppState;

/// Suggest the caller's next meeting id.
pub async fn next_meeting_id(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<NextMeetingId>> {
    Ok(Json(meetings::next_meeting_id(&state, &user).await?))
}

/// Summarize a transcript and store it.
pub async fn generate_summary(
    State(state): State<AppState>,
    user: AuthUser,
    body: std::result::Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>> {
    let Json(request) = body?;
    Ok(Json(meetings::generate_summary(&state, &user, request).await?))
}

/// Render a transcript as bullet points and store them.
pub async fn generate_bullets(
    State(state): State<AppState>,
    user: AuthUser,
    body: std::result::Result<Json<BulletRequest>, JsonRejection>,
) -> Result<Json<BulletResponse>> {
    let Json(request) = body?;
    Ok(Json(meetings::generate_bullets(&state, &user, request).await?))
}

/// List the caller's stored summaries.
pub async fn list_summaries(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<SummaryList>> {
    Ok(Json(meetings::list_summaries(&state, &user).await?))
}

/// Delete one of the caller's meetings.
pub async fn delete_summary(
    State(state): State<AppState>,
    user: AuthUser,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>> {
    let Path(meeting_id) = path?;
    meetings::delete_summary(&state, &user, meeting_id).await?;
    Ok(Json(Message::new("Summary deleted successfully")))
}

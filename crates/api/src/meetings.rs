//! Summary generation and the stored meeting lifecycle.

use database::{bullet_point, meeting, validation, DatabaseError, MeetingSummary, NewBullets, NewMeeting};
use serde::{Deserialize, Serialize};
use summary_core::SummaryStrategy;
use tracing::{info, warn};

use crate::auth::AuthUser;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// A meeting id as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MeetingIdInput {
    Number(i64),
    Text(String),
}

impl MeetingIdInput {
    fn parse(&self) -> Result<i64> {
        let id = match self {
            MeetingIdInput::Number(n) => *n,
            MeetingIdInput::Text(s) => s.trim().parse().map_err(|_| {
                ApiError::Validation(format!("Meeting ID must be an integer, got {:?}", s))
            })?,
        };
        validation::validate_meeting_id(id)?;
        Ok(id)
    }
}

/// Summary generation request body.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// `"extractive"` or anything else for abstractive.
    #[serde(default, rename = "type")]
    pub strategy: Option<String>,
    #[serde(default)]
    pub meeting_id: Option<MeetingIdInput>,
    #[serde(default)]
    pub generate_bullets: Option<bool>,
}

/// Generated summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub msg: String,
    pub summary: String,
    /// Present only when bullets were requested.
    pub bullets: Option<String>,
}

/// Bullet generation request body.
#[derive(Debug, Default, Deserialize)]
pub struct BulletRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub meeting_id: Option<MeetingIdInput>,
}

/// Generated bullets.
#[derive(Debug, Serialize, Deserialize)]
pub struct BulletResponse {
    pub msg: String,
    pub bullets: String,
}

/// Next suggested meeting id.
#[derive(Debug, Serialize, Deserialize)]
pub struct NextMeetingId {
    pub next_meeting_id: i64,
}

/// The caller's stored summaries.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryList {
    pub summaries: Vec<MeetingSummary>,
}

/// Suggest the caller's next meeting id.
pub async fn next_meeting_id(state: &AppState, user: &AuthUser) -> Result<NextMeetingId> {
    let next_meeting_id = meeting::next_meeting_id(state.db.pool(), &user.email)
        .await
        .map_err(|e| match e {
            DatabaseError::MeetingIdsExhausted { .. } => ApiError::Conflict(
                "No meeting IDs left; delete a meeting to free one.".to_string(),
            ),
            other => other.into(),
        })?;
    Ok(NextMeetingId { next_meeting_id })
}

/// Summarize a transcript and store it under the requested meeting id.
///
/// The summary is computed before anything is written, so a model failure
/// or timeout stores nothing. Summary and bullets are inserted together.
pub async fn generate_summary(
    state: &AppState,
    user: &AuthUser,
    request: SummaryRequest,
) -> Result<SummaryResponse> {
    let (text, meeting_id) = required_text_and_id(request.text, request.meeting_id)?;
    let strategy = SummaryStrategy::from_wire(request.strategy.as_deref());
    let pool = state.db.pool();

    let with_bullets = request.generate_bullets.unwrap_or(false);

    // Cheap early exits before model work; the insert below is what actually
    // enforces uniqueness.
    if meeting::exists(pool, &user.email, meeting_id).await? {
        return Err(meeting_conflict(meeting_id));
    }
    if with_bullets && bullet_point::exists(pool, &user.email, meeting_id).await? {
        return Err(bullets_conflict(meeting_id));
    }

    let summary = state.engine.summarize(&text, strategy).await?;
    let bullets = with_bullets.then(|| summary_core::bullets(&text));

    let record = NewMeeting {
        user_email: user.email.clone(),
        meeting_id,
        text,
        summary,
    };

    meeting::insert_summary_with_bullets(pool, &record, bullets.as_deref())
        .await
        .map_err(|e| conflict_or(e, meeting_id))?;

    info!(
        user = %user.email,
        meeting_id,
        %strategy,
        with_bullets = bullets.is_some(),
        "Generated summary"
    );

    Ok(SummaryResponse {
        msg: "Summary generated successfully".to_string(),
        summary: record.summary,
        bullets,
    })
}

/// Render a transcript as bullets and store them.
///
/// No summary needs to exist for the meeting id.
pub async fn generate_bullets(
    state: &AppState,
    user: &AuthUser,
    request: BulletRequest,
) -> Result<BulletResponse> {
    let (text, meeting_id) = required_text_and_id(request.text, request.meeting_id)?;
    let bullets = summary_core::bullets(&text);

    let record = NewBullets {
        user_email: user.email.clone(),
        meeting_id,
        text,
        bullets,
    };

    bullet_point::insert_bullets(state.db.pool(), &record)
        .await
        .map_err(|e| conflict_or(e, meeting_id))?;

    info!(user = %user.email, meeting_id, "Generated bullet points");

    Ok(BulletResponse {
        msg: "Bullet points generated successfully".to_string(),
        bullets: record.bullets,
    })
}

/// List the caller's summaries.
pub async fn list_summaries(state: &AppState, user: &AuthUser) -> Result<SummaryList> {
    let summaries = meeting::list_for_user(state.db.pool(), &user.email).await?;

    if summaries.is_empty() {
        return Err(ApiError::NotFound("No summaries found".to_string()));
    }

    Ok(SummaryList { summaries })
}

/// Delete one of the caller's summaries.
pub async fn delete_summary(state: &AppState, user: &AuthUser, meeting_id: i64) -> Result<()> {
    meeting::delete(state.db.pool(), &user.email, meeting_id, state.delete_policy)
        .await
        .map_err(|e| match e {
            DatabaseError::NotFound { .. } => {
                ApiError::NotFound("Summary not found or permission denied".to_string())
            }
            other => other.into(),
        })?;

    info!(user = %user.email, meeting_id, "Deleted summary");
    Ok(())
}

fn required_text_and_id(
    text: Option<String>,
    meeting_id: Option<MeetingIdInput>,
) -> Result<(String, i64)> {
    match (text, meeting_id) {
        (Some(text), Some(id)) if !text.trim().is_empty() => Ok((text, id.parse()?)),
        _ => Err(ApiError::Validation(
            "Text and Meeting ID are required".to_string(),
        )),
    }
}

fn meeting_conflict(meeting_id: i64) -> ApiError {
    ApiError::Conflict(format!("Meeting ID {} already exists.", meeting_id))
}

fn bullets_conflict(meeting_id: i64) -> ApiError {
    ApiError::Conflict(format!(
        "Bullet points for meeting ID {} already exist.",
        meeting_id
    ))
}

fn conflict_or(err: DatabaseError, meeting_id: i64) -> ApiError {
    match err {
        DatabaseError::AlreadyExists { entity: "Meeting", .. } => {
            warn!(meeting_id, "Lost insert race for meeting id");
            meeting_conflict(meeting_id)
        }
        DatabaseError::AlreadyExists { .. } => bullets_conflict(meeting_id),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_id_input_parsing() {
        assert_eq!(MeetingIdInput::Number(4).parse().unwrap(), 4);
        assert_eq!(MeetingIdInput::Text(" 12 ".to_string()).parse().unwrap(), 12);
        assert!(matches!(
            MeetingIdInput::Text("abc".to_string()).parse(),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            MeetingIdInput::Number(0).parse(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_request_accepts_number_or_string_id() {
        let request: SummaryRequest =
            serde_json::from_str(r#"{"text": "t", "type": "extractive", "meeting_id": "7"}"#)
                .unwrap();
        assert_eq!(request.meeting_id, Some(MeetingIdInput::Text("7".to_string())));
        assert_eq!(request.strategy.as_deref(), Some("extractive"));
        assert_eq!(request.generate_bullets, None);

        let request: BulletRequest =
            serde_json::from_str(r#"{"text": "t", "meeting_id": 7}"#).unwrap();
        assert_eq!(request.meeting_id, Some(MeetingIdInput::Number(7)));
    }

    #[test]
    fn test_required_fields() {
        assert!(required_text_and_id(None, Some(MeetingIdInput::Number(1))).is_err());
        assert!(required_text_and_id(Some("  ".to_string()), Some(MeetingIdInput::Number(1))).is_err());
        assert!(required_text_and_id(Some("text".to_string()), None).is_err());
        assert_eq!(
            required_text_and_id(Some("text".to_string()), Some(MeetingIdInput::Number(2))).unwrap(),
            ("text".to_string(), 2)
        );
    }
}

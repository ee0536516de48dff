//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Display name.
    pub username: String,
    /// Unique email, used as the identity in session tokens.
    pub email: String,
    /// PHC-format password hash.
    #[serde(skip_serializing)]
    pub password: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Fields needed to register a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Already hashed password.
    pub password_hash: String,
}

/// A stored summary joined with its bullet points, as listed to the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MeetingSummary {
    /// Per-user meeting id.
    pub meeting_id: i64,
    /// Original transcript text.
    pub ptext: String,
    /// Generated summary.
    pub summary: String,
    /// Bullet rendering, empty when none was stored.
    pub bullet_points: String,
}

/// A summary about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeeting {
    pub user_email: String,
    pub meeting_id: i64,
    pub text: String,
    pub summary: String,
}

/// A stored bullet rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BulletPoints {
    pub user_email: String,
    pub meeting_id: i64,
    pub ptext: String,
    pub bullets: String,
    pub created_at: String,
}

/// A bullet rendering about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBullets {
    pub user_email: String,
    pub meeting_id: i64,
    pub text: String,
    pub bullets: String,
}

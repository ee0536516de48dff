//! Input validation for registration and meeting requests.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid email format.
    InvalidEmail(String),
    /// Meeting ids are positive integers.
    InvalidMeetingId(i64),
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            ValidationError::InvalidMeetingId(id) => {
                write!(
                    f,
                    "Meeting ID must be between 1 and {}, got {}",
                    MAX_MEETING_ID, id
                )
            }
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Largest accepted meeting id. The schema enforces the same bound.
pub const MAX_MEETING_ID: i64 = 1_000_000_000;

/// Maximum allowed length for email addresses.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum allowed length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Maximum allowed length for passwords (hashing cost grows with input).
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// Validate an email address.
///
/// Accepts `local@domain` with a dotted domain. Surrounding whitespace is
/// ignored. This is a shape check, not RFC 5322.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    require(email, "email")?;
    bounded(email, "email", MAX_EMAIL_LENGTH)?;

    let invalid = |reason: &str| Err(ValidationError::InvalidEmail(reason.to_string()));

    let Some((local, domain)) = email.split_once('@') else {
        return invalid("missing @");
    };
    if domain.contains('@') {
        return invalid("more than one @");
    }
    if local.is_empty() || domain.is_empty() {
        return invalid("empty local part or domain");
    }
    if domain.split('.').count() < 2 || domain.split('.').any(str::is_empty) {
        return invalid("domain needs non-empty dot-separated labels");
    }

    Ok(())
}

/// Validate a username: non-blank and bounded.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    require(username, "username")?;
    bounded(username.trim(), "username", MAX_USERNAME_LENGTH)
}

/// Validate a password: non-empty and bounded. Strength rules are not enforced.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Empty("password".to_string()));
    }
    bounded(password, "password", MAX_PASSWORD_LENGTH)
}

/// Validate a meeting id.
pub fn validate_meeting_id(meeting_id: i64) -> Result<(), ValidationError> {
    if !(1..=MAX_MEETING_ID).contains(&meeting_id) {
        return Err(ValidationError::InvalidMeetingId(meeting_id));
    }
    Ok(())
}

/// Reject blank text.
pub fn require(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field.to_string()));
    }
    Ok(())
}

fn bounded(value: &str, field: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            actual,
        });
    }
    Ok(())
}

//! Bullet point persistence.
//!
//! Bullet rows share the (user, meeting id) key of summaries but do not
//! require one to exist.

use sqlx::{SqliteConnection, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::{BulletPoints, NewBullets};

/// Insert a standalone bullet rendering in its own transaction.
///
/// Fails with [`DatabaseError::AlreadyExists`] if the user already has bullets
/// stored for this meeting id.
pub async fn insert_bullets(pool: &SqlitePool, bullets: &NewBullets) -> Result<()> {
    let mut tx = pool.begin().await?;
    insert_in(&mut tx, bullets).await?;
    tx.commit().await?;

    tracing::debug!(
        user = %bullets.user_email,
        meeting_id = bullets.meeting_id,
        "Stored bullet points"
    );
    Ok(())
}

/// Insert bullets on an existing connection or transaction.
pub(crate) async fn insert_in(conn: &mut SqliteConnection, bullets: &NewBullets) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO bullet_points (user_email, meet_id, ptext, bullets)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&bullets.user_email)
    .bind(bullets.meeting_id)
    .bind(&bullets.text)
    .bind(&bullets.bullets)
    .execute(conn)
    .await
    .map_err(|e| {
        DatabaseError::on_insert(e, "Bullet points", || {
            format!("{}/{}", bullets.user_email, bullets.meeting_id)
        })
    })?;

    Ok(())
}

/// Get the bullets stored for one meeting.
pub async fn get_bullets(
    pool: &SqlitePool,
    user_email: &str,
    meeting_id: i64,
) -> Result<Option<BulletPoints>> {
    let record = sqlx::query_as::<_, BulletPoints>(
        r#"
        SELECT user_email, meet_id AS meeting_id, ptext, bullets, created_at
        FROM bullet_points
        WHERE user_email = ? AND meet_id = ?
        "#,
    )
    .bind(user_email)
    .bind(meeting_id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Check whether bullets are stored for this user and meeting id.
pub async fn exists(pool: &SqlitePool, user_email: &str, meeting_id: i64) -> Result<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT 1 FROM bullet_points WHERE user_email = ? AND meet_id = ?",
    )
    .bind(user_email)
    .bind(meeting_id)
    .fetch_optional(pool)
    .await?;

    Ok(found.is_some())
}

/// Delete bullets on an existing connection or transaction.
///
/// Returns the number of rows removed.
pub(crate) async fn delete_in(
    conn: &mut SqliteConnection,
    user_email: &str,
    meeting_id: i64,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM bullet_points
        WHERE user_email = ? AND meet_id = ?
        "#,
    )
    .bind(user_email)
    .bind(meeting_id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

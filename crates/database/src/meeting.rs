//! Meeting summary persistence and meeting id allocation.

use sqlx::{SqliteConnection, SqlitePool};

use crate::bullet_point;
use crate::error::{DatabaseError, Result};
use crate::models::{MeetingSummary, NewBullets, NewMeeting};
use crate::validation::MAX_MEETING_ID;

/// What happens to a meeting's bullet points when its summary is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Remove the matching bullet row in the same transaction.
    #[default]
    CascadeBullets,
    /// Leave bullet rows in place.
    SummaryOnly,
}

/// Suggest the next meeting id for a user.
///
/// Returns one more than the largest stored id, or 1 when the user has no
/// summaries. Gaps are not reused. The value is advisory: two callers can
/// receive the same id, and only the insert decides who gets it.
///
/// Fails with [`DatabaseError::MeetingIdsExhausted`] once the user holds
/// [`MAX_MEETING_ID`].
pub async fn next_meeting_id(pool: &SqlitePool, user_email: &str) -> Result<i64> {
    let max = sqlx::query_scalar::<_, Option<i64>>(
        r#"
        SELECT MAX(meet_id) FROM summaries
        WHERE user_email = ?
        "#,
    )
    .bind(user_email)
    .fetch_one(pool)
    .await?;

    max.unwrap_or(0)
        .checked_add(1)
        .filter(|next| *next <= MAX_MEETING_ID)
        .ok_or_else(|| DatabaseError::MeetingIdsExhausted {
            user: user_email.to_string(),
        })
}

/// Check whether a summary is stored for this user and meeting id.
pub async fn exists(pool: &SqlitePool, user_email: &str, meeting_id: i64) -> Result<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT 1 FROM summaries
        WHERE user_email = ? AND meet_id = ?
        "#,
    )
    .bind(user_email)
    .bind(meeting_id)
    .fetch_optional(pool)
    .await?;

    Ok(found.is_some())
}

/// Insert a summary.
///
/// Fails with [`DatabaseError::AlreadyExists`] if the user already has a
/// summary under this meeting id; the stored record is left untouched.
pub async fn insert_summary(pool: &SqlitePool, meeting: &NewMeeting) -> Result<()> {
    insert_summary_with_bullets(pool, meeting, None).await
}

/// Insert a summary and, optionally, its bullet points as one unit.
///
/// Both rows are written in a single transaction: if the bullet insert
/// fails, the summary is rolled back too.
pub async fn insert_summary_with_bullets(
    pool: &SqlitePool,
    meeting: &NewMeeting,
    bullets: Option<&str>,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    insert_in(&mut tx, meeting).await?;

    if let Some(bullets) = bullets {
        let record = NewBullets {
            user_email: meeting.user_email.clone(),
            meeting_id: meeting.meeting_id,
            text: meeting.text.clone(),
            bullets: bullets.to_string(),
        };
        bullet_point::insert_in(&mut tx, &record).await?;
    }

    tx.commit().await?;

    tracing::debug!(
        user = %meeting.user_email,
        meeting_id = meeting.meeting_id,
        with_bullets = bullets.is_some(),
        "Stored meeting summary"
    );
    Ok(())
}

async fn insert_in(conn: &mut SqliteConnection, meeting: &NewMeeting) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO summaries (user_email, meet_id, ptext, summary)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&meeting.user_email)
    .bind(meeting.meeting_id)
    .bind(&meeting.text)
    .bind(&meeting.summary)
    .execute(conn)
    .await
    .map_err(|e| {
        DatabaseError::on_insert(e, "Meeting", || meeting.meeting_id.to_string())
    })?;

    Ok(())
}

/// List a user's summaries with their bullet points, ordered by meeting id.
///
/// Every summary is returned; a summary without bullets gets an empty
/// `bullet_points`. Bullets with no summary are not listed.
pub async fn list_for_user(pool: &SqlitePool, user_email: &str) -> Result<Vec<MeetingSummary>> {
    let rows = sqlx::query_as::<_, MeetingSummary>(
        r#"
        SELECT s.meet_id AS meeting_id,
               s.ptext AS ptext,
               s.summary AS summary,
               COALESCE(b.bullets, '') AS bullet_points
        FROM summaries s
        LEFT JOIN bullet_points b
            ON s.meet_id = b.meet_id AND s.user_email = b.user_email
        WHERE s.user_email = ?
        ORDER BY s.meet_id
        "#,
    )
    .bind(user_email)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Delete a user's summary.
///
/// Under [`DeletePolicy::CascadeBullets`] the matching bullets go in the
/// same transaction, and a bullet row with no summary counts as a match, so
/// standalone bullets can be removed too. Under [`DeletePolicy::SummaryOnly`]
/// only the summary is considered.
///
/// Fails with [`DatabaseError::NotFound`] when nothing matched, which also
/// covers ids owned by another user.
pub async fn delete(
    pool: &SqlitePool,
    user_email: &str,
    meeting_id: i64,
    policy: DeletePolicy,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    let summaries_removed = sqlx::query(
        r#"
        DELETE FROM summaries
        WHERE user_email = ? AND meet_id = ?
        "#,
    )
    .bind(user_email)
    .bind(meeting_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let bullets_removed = match policy {
        DeletePolicy::CascadeBullets => {
            bullet_point::delete_in(&mut tx, user_email, meeting_id).await?
        }
        DeletePolicy::SummaryOnly => 0,
    };

    if summaries_removed + bullets_removed == 0 {
        // Dropping the transaction rolls it back.
        return Err(DatabaseError::NotFound {
            entity: "Meeting",
            id: meeting_id.to_string(),
        });
    }

    tx.commit().await?;

    tracing::debug!(
        user = %user_email,
        meeting_id,
        summaries_removed,
        bullets_removed,
        "Deleted meeting"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bullet_point::{get_bullets, insert_bullets};
    use crate::{user, Database, NewUser};

    const ALICE: &str = "alice@example.com";
    const BOB: &str = "bob@example.com";

    async fn test_db() -> Database {
        let db = Database::in_memory().await.unwrap();
        for email in [ALICE, BOB] {
            user::create_user(
                db.pool(),
                &NewUser {
                    username: email.to_string(),
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                },
            )
            .await
            .unwrap();
        }
        db
    }

    fn meeting(email: &str, meeting_id: i64, summary: &str) -> NewMeeting {
        NewMeeting {
            user_email: email.to_string(),
            meeting_id,
            text: format!("transcript {}", meeting_id),
            summary: summary.to_string(),
        }
    }

    #[tokio::test]
    async fn test_next_id_starts_at_one() {
        let db = test_db().await;
        assert_eq!(next_meeting_id(db.pool(), ALICE).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_next_id_is_max_plus_one() {
        let db = test_db().await;
        insert_summary(db.pool(), &meeting(ALICE, 1, "s1")).await.unwrap();
        insert_summary(db.pool(), &meeting(ALICE, 3, "s3")).await.unwrap();
        insert_summary(db.pool(), &meeting(BOB, 10, "b10")).await.unwrap();

        assert_eq!(next_meeting_id(db.pool(), ALICE).await.unwrap(), 4);
        assert_eq!(next_meeting_id(db.pool(), BOB).await.unwrap(), 11);
    }

    #[tokio::test]
    async fn test_next_id_at_limit_is_exhausted() {
        let db = test_db().await;
        insert_summary(db.pool(), &meeting(ALICE, MAX_MEETING_ID, "last"))
            .await
            .unwrap();

        let result = next_meeting_id(db.pool(), ALICE).await;
        assert!(matches!(
            result,
            Err(DatabaseError::MeetingIdsExhausted { ref user }) if user == ALICE
        ));
        // Other users are unaffected.
        assert_eq!(next_meeting_id(db.pool(), BOB).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_schema_rejects_ids_past_limit() {
        let db = test_db().await;

        for id in [MAX_MEETING_ID + 1, i64::MAX, 0] {
            let result = insert_summary(db.pool(), &meeting(ALICE, id, "s")).await;
            assert!(matches!(result, Err(DatabaseError::Sqlx(_))), "id {} accepted", id);
        }
        assert_eq!(next_meeting_id(db.pool(), ALICE).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_exists() {
        let db = test_db().await;
        insert_summary(db.pool(), &meeting(ALICE, 2, "s")).await.unwrap();

        assert!(exists(db.pool(), ALICE, 2).await.unwrap());
        assert!(!exists(db.pool(), ALICE, 1).await.unwrap());
        assert!(!exists(db.pool(), BOB, 2).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected_and_first_kept() {
        let db = test_db().await;
        insert_summary(db.pool(), &meeting(ALICE, 1, "first")).await.unwrap();

        let result = insert_summary(db.pool(), &meeting(ALICE, 1, "replacement")).await;
        assert!(matches!(
            result,
            Err(DatabaseError::AlreadyExists { entity: "Meeting", .. })
        ));

        let listed = list_for_user(db.pool(), ALICE).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].summary, "first");
    }

    #[tokio::test]
    async fn test_concurrent_inserts_same_key_one_wins() {
        let db = test_db().await;

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move {
                    insert_summary(db.pool(), &meeting(ALICE, 5, &format!("attempt {}", i))).await
                })
            })
            .collect();

        let mut ok = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => ok += 1,
                Err(DatabaseError::AlreadyExists { .. }) => conflicts += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(list_for_user(db.pool(), ALICE).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_bullet_insert_rolls_back_summary() {
        let db = test_db().await;
        // Bullets already stored standalone for id 4.
        insert_bullets(
            db.pool(),
            &NewBullets {
                user_email: ALICE.to_string(),
                meeting_id: 4,
                text: "t".to_string(),
                bullets: "• t".to_string(),
            },
        )
        .await
        .unwrap();

        let result =
            insert_summary_with_bullets(db.pool(), &meeting(ALICE, 4, "s4"), Some("• new")).await;

        assert!(matches!(
            result,
            Err(DatabaseError::AlreadyExists { entity: "Bullet points", .. })
        ));
        assert!(!exists(db.pool(), ALICE, 4).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_left_join_and_isolation() {
        let db = test_db().await;
        insert_summary_with_bullets(db.pool(), &meeting(ALICE, 2, "two"), Some("• two"))
            .await
            .unwrap();
        insert_summary(db.pool(), &meeting(ALICE, 1, "one")).await.unwrap();
        insert_summary_with_bullets(db.pool(), &meeting(BOB, 1, "bob"), Some("• bob"))
            .await
            .unwrap();

        let listed = list_for_user(db.pool(), ALICE).await.unwrap();
        assert_eq!(
            listed,
            vec![
                MeetingSummary {
                    meeting_id: 1,
                    ptext: "transcript 1".to_string(),
                    summary: "one".to_string(),
                    bullet_points: String::new(),
                },
                MeetingSummary {
                    meeting_id: 2,
                    ptext: "transcript 2".to_string(),
                    summary: "two".to_string(),
                    bullet_points: "• two".to_string(),
                },
            ]
        );
        assert!(list_for_user(db.pool(), "nobody@example.com")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let db = test_db().await;
        insert_summary(db.pool(), &meeting(ALICE, 1, "alice")).await.unwrap();

        let result = delete(db.pool(), BOB, 1, DeletePolicy::CascadeBullets).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
        assert!(exists(db.pool(), ALICE, 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_cascade_policy() {
        let db = test_db().await;
        insert_summary_with_bullets(db.pool(), &meeting(ALICE, 1, "s"), Some("• b"))
            .await
            .unwrap();

        delete(db.pool(), ALICE, 1, DeletePolicy::CascadeBullets)
            .await
            .unwrap();

        assert!(!exists(db.pool(), ALICE, 1).await.unwrap());
        assert!(get_bullets(db.pool(), ALICE, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_summary_only_policy_keeps_bullets() {
        let db = test_db().await;
        insert_summary_with_bullets(db.pool(), &meeting(ALICE, 1, "s"), Some("• b"))
            .await
            .unwrap();

        delete(db.pool(), ALICE, 1, DeletePolicy::SummaryOnly)
            .await
            .unwrap();

        assert!(!exists(db.pool(), ALICE, 1).await.unwrap());
        assert!(get_bullets(db.pool(), ALICE, 1).await.unwrap().is_some());
        // The freed id can be reused for a summary, but not for bullets.
        let result =
            insert_summary_with_bullets(db.pool(), &meeting(ALICE, 1, "again"), Some("• b")).await;
        assert!(matches!(result, Err(DatabaseError::AlreadyExists { .. })));
        insert_summary(db.pool(), &meeting(ALICE, 1, "again")).await.unwrap();
        assert_eq!(list_for_user(db.pool(), ALICE).await.unwrap()[0].bullet_points, "• b");
    }

    #[tokio::test]
    async fn test_cascade_delete_removes_standalone_bullets() {
        let db = test_db().await;
        insert_bullets(
            db.pool(),
            &NewBullets {
                user_email: ALICE.to_string(),
                meeting_id: 4,
                text: "t".to_string(),
                bullets: "• t".to_string(),
            },
        )
        .await
        .unwrap();

        delete(db.pool(), ALICE, 4, DeletePolicy::CascadeBullets)
            .await
            .unwrap();
        assert!(get_bullets(db.pool(), ALICE, 4).await.unwrap().is_none());

        // The id is fully free again.
        insert_summary_with_bullets(db.pool(), &meeting(ALICE, 4, "s4"), Some("• s4"))
            .await
            .unwrap();
        assert_eq!(list_for_user(db.pool(), ALICE).await.unwrap()[0].bullet_points, "• s4");

        // Nothing left to delete for another user's id.
        let result = delete(db.pool(), BOB, 4, DeletePolicy::CascadeBullets).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_summary_only_delete_ignores_standalone_bullets() {
        let db = test_db().await;
        insert_bullets(
            db.pool(),
            &NewBullets {
                user_email: ALICE.to_string(),
                meeting_id: 6,
                text: "t".to_string(),
                bullets: "• t".to_string(),
            },
        )
        .await
        .unwrap();

        let result = delete(db.pool(), ALICE, 6, DeletePolicy::SummaryOnly).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
        assert!(get_bullets(db.pool(), ALICE, 6).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_foreign_key_requires_user() {
        let db = test_db().await;
        let result = insert_summary(db.pool(), &meeting("ghost@example.com", 1, "s")).await;
        assert!(matches!(result, Err(DatabaseError::Sqlx(_))));
    }
}

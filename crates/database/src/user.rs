//! User storage.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{NewUser, User};

/// Create a new user and return its row id.
///
/// Fails with [`DatabaseError::AlreadyExists`] when the email is taken.
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, email, password)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::on_insert(e, "User", || user.email.clone()))?;

    tracing::info!(email = %user.email, "Registered user");

    Ok(result.last_insert_rowid())
}

/// Get a user by email.
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            username: "bob".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = Database::in_memory().await.unwrap();

        let id = create_user(db.pool(), &new_user("bob@example.com")).await.unwrap();
        let fetched = get_user_by_email(db.pool(), "bob@example.com").await.unwrap();

        assert_eq!(fetched.id, id);
        assert_eq!(fetched.username, "bob");
        assert_eq!(fetched.password, "$argon2id$fake");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = Database::in_memory().await.unwrap();

        let id = create_user(db.pool(), &new_user("bob@example.com")).await.unwrap();
        let result = create_user(db.pool(), &new_user("bob@example.com")).await;

        assert!(matches!(
            result,
            Err(DatabaseError::AlreadyExists { entity: "User", .. })
        ));
        let stored = get_user_by_email(db.pool(), "bob@example.com").await.unwrap();
        assert_eq!(stored.id, id);
    }

    #[tokio::test]
    async fn test_unknown_user_not_found() {
        let db = Database::in_memory().await.unwrap();
        let result = get_user_by_email(db.pool(), "nobody@example.com").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "secret-hash".to_string(),
            created_at: "2026-01-01 00:00:00".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}

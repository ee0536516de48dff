//! SQLite persistence layer for meeting summaries.
//!
//! This crate provides async database operations for users, stored
//! summaries and bullet points using SQLx with SQLite.
//!
//! Every summary and bullet row is scoped to its owner's email, and the
//! schema enforces at most one of each per (user, meeting id). Inserts rely
//! on that constraint instead of a separate existence check, so concurrent
//! requests for the same key cannot both succeed.
//!
//! # Example
//!
//! ```no_run
//! use database::{meeting, user, Database, NewMeeting, NewUser};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:meeting_notes.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     user::create_user(db.pool(), &NewUser {
//!         username: "alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!         password_hash: "$argon2id$...".to_string(),
//!     }).await?;
//!
//!     let meeting_id = meeting::next_meeting_id(db.pool(), "alice@example.com").await?;
//!     meeting::insert_summary(db.pool(), &NewMeeting {
//!         user_email: "alice@example.com".to_string(),
//!         meeting_id,
//!         text: "Long transcript...".to_string(),
//!         summary: "Short summary.".to_string(),
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod bullet_point;
pub mod error;
pub mod meeting;
pub mod models;
pub mod user;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use meeting::DeletePolicy;
pub use models::{BulletPoints, MeetingSummary, NewBullets, NewMeeting, NewUser, User};
pub use validation::ValidationError;

// Re-export sqlx so callers can name its error type
pub use sqlx;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Each request holds at most one connection at a time.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// let db = database::Database::connect("sqlite:data/meeting_notes.db?mode=rwc").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Open a fresh, migrated in-memory database.
    ///
    /// Every SQLite connection to `:memory:` is a separate database, so the
    /// pool is capped at a single connection.
    pub async fn in_memory() -> Result<Self> {
        let db = Self::connect_with_pool_size("sqlite::memory:", 1).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

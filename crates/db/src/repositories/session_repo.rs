//! Repository for the `sessions` table.

use inventario_core::types::Timestamp;

use crate::models::session::{CreateSession, Session};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token_hash, expires_at, created_at";

/// Provides lookup and revocation for login sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a session by its token hash, expired or not.
    pub async fn find_by_token_hash(
        pool: &DbPool,
        hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE token_hash = ?");
        sqlx::query_as::<_, Session>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session with the given token hash. Returns `true` if a row was removed.
    pub async fn delete_by_token_hash(pool: &DbPool, hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete sessions whose expiry has passed. Returns the count of deleted rows.
    pub async fn delete_expired(pool: &DbPool, now: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now)
            .execute(pool)
            .await?;
        let removed = result.rows_affected();
        if removed > 0 {
            tracing::debug!(removed, "Purged expired sessions");
        }
        Ok(removed)
    }
}

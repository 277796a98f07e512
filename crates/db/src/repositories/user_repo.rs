//! User-specific queries on top of the generic `users` repository.

use crate::models::user::User;
use crate::repositories::crud::{CrudRepo, Resource};
use crate::DbPool;

impl CrudRepo<User> {
    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {} FROM users WHERE email = ?", User::COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}

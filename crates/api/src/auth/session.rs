//! Session authenticator: credentials in, opaque session token out.
//!
//! The authenticator only maps tokens to users. Carrying the token between
//! requests (the cookie) is the HTTP layer's job; see
//! [`crate::middleware::auth`].

use chrono::Utc;
use inventario_core::types::DbId;
use inventario_db::models::session::CreateSession;
use inventario_db::models::user::User;
use inventario_db::repositories::{SessionRepo, UserRepo};
use inventario_db::DbPool;

use crate::auth::password::verify_password;
use crate::auth::token::{generate_session_token, hash_session_token};

/// Why a login was refused.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately does not say which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// A successful login: the user and the plaintext token to hand to the client.
#[derive(Debug)]
pub struct Login {
    pub user: User,
    pub token: String,
}

/// Establishes, resolves and ends login sessions.
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    pool: DbPool,
    ttl: chrono::Duration,
}

impl SessionAuthenticator {
    pub fn new(pool: DbPool, ttl_hours: i64) -> Self {
        Self {
            pool,
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    /// Check credentials and open a session.
    ///
    /// Both an unknown email and a wrong password yield
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Login, AuthError> {
        let user = UserRepo::find_by_email(&self.pool, email).await?;
        let Some(user) = user.filter(|u| verify_password(password, &u.password_hash)) else {
            tracing::warn!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        };

        let now = Utc::now();
        SessionRepo::delete_expired(&self.pool, now).await?;

        let (token, token_hash) = generate_session_token();
        let session = SessionRepo::create(
            &self.pool,
            &CreateSession {
                user_id: user.id,
                token_hash,
                expires_at: now + self.ttl,
            },
        )
        .await?;

        tracing::info!(user_id = user.id, session_id = session.id, "User logged in");
        Ok(Login { user, token })
    }

    /// End the session for `token`. Ending an unknown session is a no-op.
    pub async fn logout(&self, token: &str) -> Result<(), sqlx::Error> {
        let removed = SessionRepo::delete_by_token_hash(&self.pool, &hash_session_token(token)).await?;
        if removed {
            tracing::info!("Session ended");
        }
        Ok(())
    }

    /// Map a token to its user, or `None` if the session is unknown or expired.
    pub async fn resolve(&self, token: &str) -> Result<Option<CurrentUser>, sqlx::Error> {
        let hash = hash_session_token(token);
        let Some(session) = SessionRepo::find_by_token_hash(&self.pool, &hash).await? else {
            return Ok(None);
        };

        if session.expires_at <= Utc::now() {
            SessionRepo::delete_by_token_hash(&self.pool, &hash).await?;
            return Ok(None);
        }

        let user = UserRepo::find_by_id(&self.pool, session.user_id).await?;
        Ok(user.map(CurrentUser::from))
    }
}

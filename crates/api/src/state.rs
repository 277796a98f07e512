use std::sync::Arc;

use crate::auth::session::SessionAuthenticator;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: inventario_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Maps session tokens to users.
    pub sessions: SessionAuthenticator,
}

impl AppState {
    pub fn new(pool: inventario_db::DbPool, config: ServerConfig) -> Self {
        let sessions = SessionAuthenticator::new(pool.clone(), config.session.ttl_hours);
        Self {
            pool,
            config: Arc::new(config),
            sessions,
        }
    }
}

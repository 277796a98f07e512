//! Route definitions for the pages that are not tied to one record type.

use axum::routing::get;
use axum::Router;

use crate::handlers::{auth, dashboard, home};
use crate::state::AppState;

/// ```text
/// GET        /           -> index (public)
/// GET        /health     -> health (public)
/// GET, POST  /login      -> login_form, login (public)
/// GET        /logout     -> logout (requires auth)
/// GET        /dashboard  -> dashboard (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(dashboard::dashboard))
}

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::response::Page;
use crate::state::AppState;

/// GET / -- public landing page.
pub async fn index(jar: CookieJar) -> Response {
    Page::new("index", ()).render(jar)
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- liveness plus a database round trip. Public.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = match inventario_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            false
        }
    };

    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

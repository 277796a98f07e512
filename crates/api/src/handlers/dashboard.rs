//! Handler for the inventory dashboard.

use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use inventario_db::models::dashboard::InventorySummary;
use inventario_db::repositories::DashboardRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::RequireAuth;
use crate::response::Page;
use crate::state::AppState;

/// Dashboard payload: the per-entity counts plus who is looking at them.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub nombre: String,
    #[serde(flatten)]
    pub summary: InventorySummary,
}

/// GET /dashboard
///
/// Counts are recomputed on every request.
pub async fn dashboard(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Response> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    let view = DashboardView {
        nombre: user.name,
        summary,
    };
    Ok(Page::new("dashboard", view).render(jar))
}

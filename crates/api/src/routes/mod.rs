pub mod pages;
pub mod resource;
pub mod users;

use axum::Router;
use inventario_db::models::chair::Chair;
use inventario_db::models::computer::Computer;
use inventario_db::models::folder::Folder;
use inventario_db::models::motor::Motor;

use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /, /health, /login                public pages
/// /logout, /dashboard                 session pages
/// /computadoras, /computadora/{id}    computers
/// /carpetas, /carpeta/{id}            folders
/// /sillas, /silla/{id}                chairs
/// /motores, /motor/{id}               motors
/// /usuarios, /usuario/{id}            user accounts
/// ```
///
/// Each record type also has `/agregar_*`, `/editar_*/{id}` and
/// `/eliminar_*/{id}`; see [`resource::router`].
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(resource::router::<Computer>())
        .merge(resource::router::<Folder>())
        .merge(resource::router::<Chair>())
        .merge(resource::router::<Motor>())
        .merge(users::router())
}

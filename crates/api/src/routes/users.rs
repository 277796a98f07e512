//! Route definitions for user accounts.

use axum::routing::{get, post};
use axum::Router;
use inventario_db::models::user::User;

use crate::handlers::{resource, users};
use crate::state::AppState;

/// ```text
/// GET        /usuarios                    -> list
/// GET        /usuario/{id}                -> view
/// GET, POST  /agregar_usuario             -> register_form, register (public)
/// GET, POST  /editar_usuario/{id}         -> edit_form, edit
/// POST       /eliminar_usuario/{id}       -> delete
///
/// GET, POST  /usuarios/crear              -> same as /agregar_usuario
/// GET, POST  /usuarios/editar/{id}        -> same as /editar_usuario/{id}
/// POST       /usuarios/eliminar/{id}      -> same as /eliminar_usuario/{id}
/// ```
pub fn router() -> Router<AppState> {
    let register = get(users::register_form).post(users::register);
    let edit = get(resource::edit_form::<User>).post(users::edit);
    let delete = post(resource::delete::<User>);

    Router::new()
        .route("/usuarios", get(resource::list::<User>))
        .route("/usuario/{id}", get(resource::view::<User>))
        .route("/agregar_usuario", register.clone())
        .route("/usuarios/crear", register)
        .route("/editar_usuario/{id}", edit.clone())
        .route("/usuarios/editar/{id}", edit)
        .route("/eliminar_usuario/{id}", delete.clone())
        .route("/usuarios/eliminar/{id}", delete)
}

//! Generic route set for a record type whose write DTOs are its forms.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::resource::{self, Controller, FormInput};
use crate::state::AppState;

/// Routes for one record type, e.g. with `COLLECTION = "computadoras"` and
/// `MEMBER = "computadora"`:
///
/// ```text
/// GET        /computadoras                 -> list
/// GET        /computadora/{id}             -> view
/// GET, POST  /agregar_computadora          -> add_form, add
/// GET, POST  /editar_computadora/{id}      -> edit_form, edit
/// POST       /eliminar_computadora/{id}    -> delete
/// ```
///
/// Every route requires auth.
pub fn router<R>() -> Router<AppState>
where
    R: Controller,
    R::Create: FormInput,
    R::Update: FormInput,
{
    let member = R::MEMBER;
    Router::new()
        .route(&R::list_path(), get(resource::list::<R>))
        .route(&format!("/{member}/{{id}}"), get(resource::view::<R>))
        .route(
            &format!("/agregar_{member}"),
            get(resource::add_form::<R>).post(resource::add::<R>),
        )
        .route(
            &format!("/editar_{member}/{{id}}"),
            get(resource::edit_form::<R>).post(resource::edit::<R>),
        )
        .route(
            &format!("/eliminar_{member}/{{id}}"),
            post(resource::delete::<R>),
        )
}

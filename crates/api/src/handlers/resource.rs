//! Generic page handlers shared by every record type.
//!
//! Each record type plugs in through [`Controller`] (paths and status
//! messages). The add and edit handlers deserialize straight into the
//! type's write DTOs, which must therefore be [`FormInput`]s. Every handler
//! takes [`RequireAuth`] as its first extractor, so anonymous requests are
//! redirected before anything else runs.

use axum::extract::{Path, State};
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use inventario_core::error::CoreError;
use inventario_core::flash::FlashMessage;
use inventario_core::types::DbId;
use inventario_db::repositories::{CrudRepo, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedForm;
use crate::middleware::auth::RequireAuth;
use crate::response::{redirect_with, Page};
use crate::state::AppState;

/// Routing and messaging for one record type.
pub trait Controller: Resource + Serialize {
    /// Plural path segment, also the list view name (e.g. `computadoras`).
    const COLLECTION: &'static str;
    /// Singular path segment (e.g. `computadora`).
    const MEMBER: &'static str;

    /// Flash text after a successful add.
    const ADDED: &'static str;
    /// Flash text after a successful edit.
    const UPDATED: &'static str;
    /// Flash text after a successful delete.
    const DELETED: &'static str;

    /// Path of the list page, where every write redirects.
    fn list_path() -> String {
        format!("/{}", Self::COLLECTION)
    }

    fn not_found(id: DbId) -> AppError {
        AppError::Core(CoreError::NotFound {
            entity: Self::ENTITY,
            id,
        })
    }
}

/// A write DTO that can be read from a submitted form.
pub trait FormInput: DeserializeOwned + Validate + Send + 'static {}

impl<T> FormInput for T where T: DeserializeOwned + Validate + Send + 'static {}

/// GET /{collection}
pub async fn list<R: Controller>(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Response> {
    let rows = CrudRepo::<R>::list(&state.pool).await?;
    Ok(Page::new(R::COLLECTION, rows).render(jar))
}

/// GET /{member}/{id}
pub async fn view<R: Controller>(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
) -> AppResult<Response> {
    let row = CrudRepo::<R>::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| R::not_found(id))?;
    Ok(Page::new(format!("ver_{}", R::MEMBER), row).render(jar))
}

/// GET /agregar_{member}
pub async fn add_form<R: Controller>(
    RequireAuth(_user): RequireAuth,
    jar: CookieJar,
) -> Response {
    Page::new(format!("agregar_{}", R::MEMBER), ()).render(jar)
}

/// POST /agregar_{member}
pub async fn add<R>(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(input): ValidatedForm<R::Create>,
) -> AppResult<Response>
where
    R: Controller,
    R::Create: FormInput,
{
    let created = CrudRepo::<R>::create(&state.pool, &input).await?;

    tracing::info!(
        entity = R::ENTITY,
        id = created.id(),
        user_id = user.user_id,
        "Record created",
    );

    Ok(redirect_with(
        jar,
        &R::list_path(),
        FlashMessage::success(R::ADDED),
    ))
}

/// GET /editar_{member}/{id}
pub async fn edit_form<R: Controller>(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
) -> AppResult<Response> {
    let row = CrudRepo::<R>::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| R::not_found(id))?;
    Ok(Page::new(format!("editar_{}", R::MEMBER), row).render(jar))
}

/// POST /editar_{member}/{id}
pub async fn edit<R>(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
    ValidatedForm(input): ValidatedForm<R::Update>,
) -> AppResult<Response>
where
    R: Controller,
    R::Update: FormInput,
{
    CrudRepo::<R>::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| R::not_found(id))?;

    tracing::info!(entity = R::ENTITY, id, user_id = user.user_id, "Record updated");

    Ok(redirect_with(
        jar,
        &R::list_path(),
        FlashMessage::success(R::UPDATED),
    ))
}

/// POST /eliminar_{member}/{id}
pub async fn delete<R: Controller>(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
) -> AppResult<Response> {
    if !CrudRepo::<R>::delete(&state.pool, id).await? {
        return Err(R::not_found(id));
    }

    tracing::info!(entity = R::ENTITY, id, user_id = user.user_id, "Record deleted");

    Ok(redirect_with(
        jar,
        &R::list_path(),
        FlashMessage::success(R::DELETED),
    ))
}

//! User account pages.
//!
//! Listing, viewing, the edit form and deletion go through the generic
//! handlers in [`crate::handlers::resource`]. Registration and the edit submit
//! are custom: passwords must be hashed, registration is open to anonymous
//! visitors, and a failed edit is reported on the form instead of aborting.

use axum::extract::{Path, State};
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use inventario_core::error::CoreError;
use inventario_core::flash::FlashMessage;
use inventario_core::roles::ROLE_DEFAULT;
use inventario_core::types::DbId;
use inventario_db::models::user::{CreateUser, EditUser, RegisterUser, UpdateUser, User};
use inventario_db::repositories::{Resource, UserRepo};

use crate::auth::password::hash_password;
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::ValidatedForm;
use crate::handlers::resource::Controller;
use crate::middleware::auth::RequireAuth;
use crate::response::{redirect_with, Page};
use crate::state::AppState;

impl Controller for User {
    const COLLECTION: &'static str = "usuarios";
    const MEMBER: &'static str = "usuario";

    const ADDED: &'static str = "Usuario registrado exitosamente";
    const UPDATED: &'static str = "Usuario actualizado exitosamente.";
    const DELETED: &'static str = "Usuario eliminado exitosamente";
}

const EMAIL_TAKEN: &str = "el correo ya está registrado";

/// GET /agregar_usuario
pub async fn register_form(jar: CookieJar) -> Response {
    Page::new("agregar_usuario", ()).render(jar)
}

/// POST /agregar_usuario
///
/// Open to anonymous visitors. The role is always [`ROLE_DEFAULT`]; a taken
/// email is a 409 conflict.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<RegisterUser>,
) -> AppResult<Response> {
    let password_hash = hash(&form.password)?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: form.name,
            email: form.email,
            password_hash,
            role: ROLE_DEFAULT.to_string(),
        },
    )
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::Core(CoreError::Conflict(EMAIL_TAKEN.to_string()))
        } else {
            AppError::Database(err)
        }
    })?;

    tracing::info!(entity = User::ENTITY, id = user.id, "User registered");

    Ok(redirect_with(
        jar,
        &User::list_path(),
        FlashMessage::success(User::ADDED),
    ))
}

/// POST /editar_usuario/{id}
///
/// The password is only re-hashed when a new one was typed. If the write
/// fails the edit form is shown again with the stored values and an error
/// message.
pub async fn edit(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<EditUser>,
) -> AppResult<Response> {
    let password_hash = form.new_password().map(hash).transpose()?;
    let input = UpdateUser {
        name: form.name,
        email: form.email,
        password_hash,
        role: form.role,
    };

    match UserRepo::update(&state.pool, id, &input).await {
        Ok(Some(_)) => {
            tracing::info!(
                entity = User::ENTITY,
                id,
                user_id = current.user_id,
                "Record updated",
            );
            Ok(redirect_with(
                jar,
                &User::list_path(),
                FlashMessage::success(User::UPDATED),
            ))
        }
        Ok(None) => Err(User::not_found(id)),
        Err(err) => {
            tracing::warn!(id, error = %err, "User update failed");
            let stored = UserRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| User::not_found(id))?;
            Ok(Page::new("editar_usuario", stored)
                .notice(FlashMessage::failure(update_failure_message(&err)))
                .render(jar))
        }
    }
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}

fn update_failure_message(err: &sqlx::Error) -> String {
    let reason = if is_unique_violation(err) {
        EMAIL_TAKEN
    } else {
        "error de base de datos"
    };
    format!("Error al actualizar el usuario: {reason}")
}

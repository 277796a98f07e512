//! Handlers for login and logout.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use inventario_core::flash::FlashMessage;

use crate::auth::session::AuthError;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{clear_session_cookie, session_cookie, RequireAuth, SESSION_COOKIE};
use crate::response::{redirect_with, Page};
use crate::state::AppState;

const LOGIN_SUCCEEDED: &str = "Inicio de sesión exitoso.";
const LOGIN_FAILED: &str = "Inicio de sesión fallido. Verifica tus credenciales.";
const LOGGED_OUT: &str = "Has cerrado sesión.";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Credentials from `POST /login`.
///
/// Accepts `correo`/`contrasena` and the English `email`/`password`; the
/// first occurrence of either name wins. Anything missing stays empty, which
/// simply fails the login.
#[derive(Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "correo" | "email" if form.email.is_empty() => form.email = value,
                "contrasena" | "password" if form.password.is_empty() => form.password = value,
                _ => {}
            }
        }
        form
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /login
pub async fn login_form(jar: CookieJar) -> Response {
    Page::new("login", ()).render(jar)
}

/// POST /login
///
/// On success sets the session cookie and redirects to the dashboard. Any
/// session the browser already held is revoked. Bad credentials, or a body
/// that is not a form at all, re-render the login page with 401 and one
/// generic message.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> AppResult<Response> {
    let form = match body {
        Ok(Form(pairs)) => LoginForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable login body");
            LoginForm::default()
        }
    };

    match state.sessions.login(&form.email, &form.password).await {
        Ok(login) => {
            if let Some(previous) = jar.get(SESSION_COOKIE) {
                state.sessions.logout(previous.value()).await?;
            }
            let jar = jar.add(session_cookie(login.token, &state.config.session));
            Ok(redirect_with(
                jar,
                "/dashboard",
                FlashMessage::success(LOGIN_SUCCEEDED),
            ))
        }
        Err(AuthError::InvalidCredentials) => Ok(Page::new("login", ())
            .status(StatusCode::UNAUTHORIZED)
            .notice(FlashMessage::failure(LOGIN_FAILED))
            .render(jar)),
        Err(AuthError::Database(err)) => Err(AppError::Database(err)),
    }
}

/// GET /logout
pub async fn logout(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.logout(cookie.value()).await?;
    }
    tracing::info!(user_id = user.user_id, "User logged out");

    Ok(redirect_with(
        clear_session_cookie(jar),
        "/",
        FlashMessage::info(LOGGED_OUT),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_spanish_and_english_names_are_accepted() {
        let spanish = LoginForm::from_pairs(pairs(&[("correo", "a@x.com"), ("contrasena", "pw")]));
        let english = LoginForm::from_pairs(pairs(&[("email", "a@x.com"), ("password", "pw")]));
        assert_eq!(spanish, english);
        assert_eq!(spanish.email, "a@x.com");
        assert_eq!(spanish.password, "pw");
    }

    #[test]
    fn test_first_occurrence_wins_when_both_names_are_sent() {
        let form = LoginForm::from_pairs(pairs(&[
            ("correo", "a@x.com"),
            ("email", "b@x.com"),
            ("contrasena", "pw"),
        ]));
        assert_eq!(form.email, "a@x.com");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        assert_eq!(LoginForm::from_pairs(Vec::new()), LoginForm::default());
    }
}

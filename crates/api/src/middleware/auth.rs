//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use inventario_core::flash::FlashMessage;

use crate::auth::session::CurrentUser;
use crate::config::SessionConfig;
use crate::error::AppError;
use crate::response::redirect_with;
use crate::state::AppState;

/// Name of the cookie carrying the plaintext session token.
pub const SESSION_COOKIE: &str = "inventario_session";

/// Where anonymous requests to protected routes are sent.
pub const LOGIN_PATH: &str = "/login";

const LOGIN_REQUIRED: &str = "Por favor inicia sesión para acceder a esta página.";

/// Requires a logged-in user. Anonymous requests are redirected to
/// [`LOGIN_PATH`] before the handler body runs.
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> AppResult<Response> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) else {
            return Err(login_redirect(jar));
        };

        match state.sessions.resolve(&token).await {
            Ok(Some(user)) => Ok(RequireAuth(user)),
            Ok(None) => Err(login_redirect(clear_session_cookie(jar))),
            Err(err) => Err(AppError::Database(err).into_response()),
        }
    }
}

/// Build the cookie that carries a freshly issued session token.
pub fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .max_age(time::Duration::hours(config.ttl_hours))
        .build()
}

/// Instruct the browser to drop its session cookie.
pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

fn login_redirect(jar: CookieJar) -> Response {
    redirect_with(jar, LOGIN_PATH, FlashMessage::info(LOGIN_REQUIRED))
}

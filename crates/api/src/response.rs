//! Shared response types for page handlers.
//!
//! HTML templating lives outside this service. A page handler returns the
//! view model a template would consume: `{ "view", "messages", "data" }`,
//! where `messages` are the flash messages queued for this page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use inventario_core::flash::FlashMessage;
use serde::Serialize;

use crate::flash;

/// Serialized page body.
#[derive(Debug, Serialize)]
pub struct PageBody<T: Serialize> {
    pub view: String,
    pub messages: Vec<FlashMessage>,
    pub data: T,
}

/// A rendered view plus any messages raised while handling this request.
#[derive(Debug)]
pub struct Page<T: Serialize> {
    view: String,
    data: T,
    status: StatusCode,
    notices: Vec<FlashMessage>,
}

impl<T: Serialize> Page<T> {
    pub fn new(view: impl Into<String>, data: T) -> Self {
        Self {
            view: view.into(),
            data,
            status: StatusCode::OK,
            notices: Vec::new(),
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Show `message` on this page rather than the next one.
    pub fn notice(mut self, message: FlashMessage) -> Self {
        self.notices.push(message);
        self
    }

    /// Drain the flash queue from `jar` into the page and build the response.
    pub fn render(self, jar: CookieJar) -> Response {
        let (jar, mut messages) = flash::take(jar);
        messages.extend(self.notices);
        let body = PageBody {
            view: self.view,
            messages,
            data: self.data,
        };
        (self.status, jar, Json(body)).into_response()
    }
}

/// Queue `message` and redirect (303 See Other) to `to`.
pub fn redirect_with(jar: CookieJar, to: &str, message: FlashMessage) -> Response {
    (flash::push(jar, message), Redirect::to(to)).into_response()
}

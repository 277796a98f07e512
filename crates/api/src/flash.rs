//! Flash-message transport over a cookie.
//!
//! [`push`] appends to the queue carried by the `inventario_flash` cookie;
//! [`take`] drains it. The page that renders next calls [`take`], so each
//! message is seen exactly once.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use inventario_core::flash::{self, FlashMessage};

pub const FLASH_COOKIE: &str = "inventario_flash";

/// Queue `message` for the next rendered page.
pub fn push(jar: CookieJar, message: FlashMessage) -> CookieJar {
    let mut queue = peek(&jar);
    queue.push(message);
    let cookie = Cookie::build((FLASH_COOKIE, flash::encode(&queue)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Drain the queue, returning the updated jar and the queued messages.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<FlashMessage>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }
    let queue = peek(&jar);
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), queue)
}

fn peek(jar: &CookieJar) -> Vec<FlashMessage> {
    jar.get(FLASH_COOKIE)
        .map(|cookie| flash::decode(cookie.value()))
        .unwrap_or_default()
}

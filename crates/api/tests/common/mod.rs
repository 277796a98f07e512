#![allow(dead_code)]

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use inventario_api::auth::password::hash_password;
use inventario_api::config::{ServerConfig, SessionConfig};
use inventario_api::router::build_app_router;
use inventario_api::state::AppState;
use inventario_db::models::user::{CreateUser, User};
use inventario_db::repositories::UserRepo;
use inventario_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig::default(),
    }
}

/// A migrated in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = inventario_db::create_memory_pool()
        .await
        .expect("in-memory pool should open");
    inventario_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over `pool`.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    build_app_router(AppState::new(pool, config.clone()), &config)
}

/// Insert a user directly, bypassing the HTTP layer.
pub async fn create_user(pool: &DbPool, name: &str, email: &str, password: &str) -> User {
    let input = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(password).expect("hashing should succeed"),
        role: "usuario".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

// ---------------------------------------------------------------------------
// Browser-like client
// ---------------------------------------------------------------------------

/// Drives the router like a browser: cookies from `Set-Cookie` are stored
/// and sent back on every following request. Redirects are not followed.
pub struct Browser {
    app: Router,
    cookies: BTreeMap<String, String>,
}

impl Browser {
    pub fn new(app: Router) -> Self {
        Self {
            app,
            cookies: BTreeMap::new(),
        }
    }

    pub fn has_cookie(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        let request = self.request(Method::GET, uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let request = self
            .request(Method::POST, uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                serde_urlencoded::to_string(fields).expect("form fields should encode"),
            ))
            .unwrap();
        self.send(request).await
    }

    /// POST a raw body with no `Content-Type` header.
    pub async fn post_body(&mut self, uri: &str, body: &str) -> Response<Body> {
        let request = self
            .request(Method::POST, uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Log in through `POST /login` and assert it redirected to the dashboard.
    pub async fn login(&mut self, email: &str, password: &str) {
        let response = self
            .post_form("/login", &[("correo", email), ("contrasena", password)])
            .await;
        assert_eq!(response.status(), 303, "login should redirect");
        assert_eq!(location(&response), "/dashboard");
    }

    fn request(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if !self.cookies.is_empty() {
            let header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(COOKIE, header);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> Response<Body> {
        let response = self.app.clone().oneshot(request).await.unwrap();
        for header in response.headers().get_all(SET_COOKIE) {
            self.store_cookie(header.to_str().unwrap());
        }
        response
    }

    fn store_cookie(&mut self, set_cookie: &str) {
        let mut parts = set_cookie.split(';').map(str::trim);
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let expired = parts.any(|attr| attr.eq_ignore_ascii_case("Max-Age=0"));
        if value.is_empty() || expired {
            self.cookies.remove(name);
        } else {
            self.cookies.insert(name.to_string(), value.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

/// The `message` texts of a rendered page's flash messages.
pub fn messages(page: &serde_json::Value) -> Vec<String> {
    page["messages"]
        .as_array()
        .expect("page should carry a messages array")
        .iter()
        .map(|m| m["message"].as_str().unwrap().to_string())
        .collect()
}

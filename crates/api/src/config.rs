/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `5`).
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session cookie settings.
    pub session: SessionConfig,
}

/// Lifetime and cookie flags for login sessions.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in hours (default: `12`).
    pub ttl_hours: i64,
    /// Mark cookies `Secure` (default: `false`, enable behind HTTPS).
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: 12,
            secure_cookie: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                           |
    /// |----------------------------|-----------------------------------|
    /// | `HOST`                     | `0.0.0.0`                         |
    /// | `PORT`                     | `5000`                            |
    /// | `DATABASE_URL`             | `sqlite://inventario.db?mode=rwc` |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                               |
    /// | `CORS_ORIGINS`             | `http://localhost:5000`           |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                              |
    /// | `SESSION_TTL_HOURS`        | `12`                              |
    /// | `SESSION_COOKIE_SECURE`    | `false`                           |
    ///
    /// # Panics
    ///
    /// Panics if a numeric or boolean variable does not parse.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");
        let port: u16 = env_parse("PORT", "5000");
        let database_url = env_or("DATABASE_URL", "sqlite://inventario.db?mode=rwc");
        let database_max_connections: u32 = env_parse("DATABASE_MAX_CONNECTIONS", "5");
        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5000"));
        let request_timeout_secs: u64 = env_parse("REQUEST_TIMEOUT_SECS", "30");

        let session = SessionConfig {
            ttl_hours: env_parse("SESSION_TTL_HOURS", "12"),
            secure_cookie: env_parse("SESSION_COOKIE_SECURE", "false"),
        };

        Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
            session,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn env_parse<T>(name: &str, default: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(name, default)
        .parse()
        .unwrap_or_else(|e| panic!("{name} is invalid: {e}"))
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

use std::net::IpAddr;

use axum::http::HeaderValue;

/// Default allowed origins: the single-page client's dev servers.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://127.0.0.1:3000,http://127.0.0.1:3001";

/// A malformed environment variable.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                 |
    /// | `PORT`                 | `5000`                                    |
    /// | `CORS_ORIGINS`         | localhost/127.0.0.1 on ports 3000 and 3001 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                      |
    /// | `DATABASE_URL`         | assembled from the `DB_*` variables       |
    /// | `DB_HOST`              | `localhost`                               |
    /// | `DB_PORT`              | `5432`                                    |
    /// | `DB_USERNAME`          | `notekeep`                                |
    /// | `DB_PASSWORD`          | `notekeep`                                |
    /// | `DB_NAME`              | `notekeep`                                |
    /// | `DB_MAX_CONNECTIONS`   | `20`                                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let host = parse("HOST", get("HOST", "0.0.0.0"))?;
        let port = parse("PORT", get("PORT", "5000"))?;
        let request_timeout_secs = parse("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS", "30"))?;

        let cors_origins = get("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db_port: u16 = parse("DB_PORT", get("DB_PORT", "5432"))?;
                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    get("DB_USERNAME", "notekeep"),
                    get("DB_PASSWORD", "notekeep"),
                    get("DB_HOST", "localhost"),
                    db_port,
                    get("DB_NAME", "notekeep"),
                )
            }
        };
        let max_connections = parse("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS", "20"))?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database: DatabaseConfig {
                url,
                max_connections,
            },
        })
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

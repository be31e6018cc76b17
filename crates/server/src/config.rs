//! Server configuration loaded from environment variables.

use std::env;

use common::{CookieConfig, CorsConfig, DatabaseConfig, JwtConfig, ServiceConfig};
use thiserror::Error;

/// Configuration errors raised at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration.
#[derive(Clone, Default)]
pub struct ServerConfig {
    pub server: ServiceConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cookie: CookieConfig,
    pub cors: CorsConfig,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("server", &self.server)
            .field("database_url", &"[REDACTED]")
            .field("database_name", &self.database.name)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt.expiration_hours)
            .field("cookie", &self.cookie)
            .field("cors", &self.cors)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let secret = env::var("ACCESS_TOKEN_SECRET")
            .or_else(|_| env::var("JWT_SECRET"))
            .map_err(|_| ConfigError::Missing("ACCESS_TOKEN_SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::Missing("ACCESS_TOKEN_SECRET"));
        }

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            Err(_) => defaults.server.port,
        };

        let mode = env::var("APP_ENV")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            server: ServiceConfig {
                host: env::var("HOST").unwrap_or(defaults.server.host),
                port,
            },
            database: DatabaseConfig {
                url: database_url_from_env().unwrap_or(defaults.database.url),
                name: env::var("DB_NAME").unwrap_or(defaults.database.name),
                services_collection: env::var("SERVICES_COLLECTION")
                    .unwrap_or(defaults.database.services_collection),
                bookings_collection: env::var("BOOKINGS_COLLECTION")
                    .unwrap_or(defaults.database.bookings_collection),
            },
            jwt: JwtConfig {
                secret,
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(defaults.jwt.expiration_hours),
            },
            cookie: CookieConfig {
                production: mode.eq_ignore_ascii_case("production"),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ORIGINS")
                    .map(|origins| parse_origins(&origins))
                    .unwrap_or(defaults.cors.allowed_origins),
            },
        })
    }

    /// Address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Resolve the connection string: an explicit URL wins, otherwise one is
/// assembled from `DB_USER`/`DB_PASS`/`DB_HOST`.
fn database_url_from_env() -> Option<String> {
    if let Ok(url) = env::var("DATABASE_URL").or_else(|_| env::var("MONGODB_URI")) {
        return Some(url);
    }

    let user = env::var("DB_USER").ok()?;
    let pass = env::var("DB_PASS").ok()?;
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost:27017".to_string());
    Some(build_database_url(&user, &pass, &host))
}

fn build_database_url(user: &str, pass: &str, host: &str) -> String {
    format!(
        "mongodb://{}:{}@{}/?retryWrites=true&w=majority",
        user, pass, host
    )
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins(" http://localhost:5173, https://app.example.com ,,");
        assert_eq!(
            origins,
            vec!["http://localhost:5173", "https://app.example.com"]
        );
    }

    #[test]
    fn builds_url_from_credentials() {
        assert_eq!(
            build_database_url("svc", "pw", "db.internal:27017"),
            "mongodb://svc:pw@db.internal:27017/?retryWrites=true&w=majority"
        );
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut config = ServerConfig::default();
        config.jwt.secret = "super-secret-value".to_string();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("[REDACTED]"));
    }
}

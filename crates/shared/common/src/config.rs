//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Document database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(skip_serializing)]
    pub url: String,
    /// Database name
    pub name: String,
    pub services_collection: String,
    pub bookings_collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            name: "services_booking".to_string(),
            services_collection: "services".to_string(),
            bookings_collection: "bookings".to_string(),
        }
    }
}

/// JWT configuration for authentication.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_hours: domain::DEFAULT_TOKEN_EXPIRATION_HOURS,
        }
    }
}

/// Attributes of the cookie carrying the access token.
///
/// In production the cookie is `Secure` with `SameSite=None` so that the
/// separately hosted frontend can send it; otherwise `SameSite=Strict`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CookieConfig {
    pub production: bool,
}

/// Cross-origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:5174".to_string(),
                "https://gkkk-deac7.firebaseapp.com".to_string(),
                "https://gkkk-deac7.web.app".to_string(),
            ],
        }
    }
}

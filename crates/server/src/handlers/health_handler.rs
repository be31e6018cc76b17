//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: DatabaseHealth,
}

/// Database health with optional error message.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// Liveness text
pub async fn root() -> &'static str {
    "Services booking server is running"
}

/// Health check endpoint - pings the database when one is configured.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match &state.database {
        None => DatabaseHealth {
            status: "in-memory".to_string(),
            error: None,
        },
        Some(db) => match db.ping().await {
            Ok(()) => DatabaseHealth {
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "Database ping failed");
                DatabaseHealth {
                    status: "unhealthy".to_string(),
                    error: Some("database unreachable".to_string()),
                }
            }
        },
    };

    let healthy = database.status != "unhealthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        database,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}

//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::http::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceStatus,
}

/// Backing store status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub storage: ServiceHealth,
}

/// Store health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity when one is wired.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let storage = match &state.database {
        Some(db) => match db.ping().await {
            Ok(()) => ServiceHealth {
                backend: "postgres".to_string(),
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => ServiceHealth {
                backend: "postgres".to_string(),
                status: "unhealthy".to_string(),
                error: Some(e.to_string()),
            },
        },
        None => ServiceHealth {
            backend: "memory".to_string(),
            status: "healthy".to_string(),
            error: None,
        },
    };

    let all_healthy = storage.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceStatus { storage },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}

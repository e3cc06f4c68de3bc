//! Route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{health_routes, user_routes};
use super::openapi::ApiDoc;
use super::state::AppState;

/// Path prefix of the current major API version
pub const API_V1_PREFIX: &str = "/api/v1";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (unversioned)
        .nest("/health", health_routes())
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Versioned resources
        .nest(&format!("{}/users", API_V1_PREFIX), user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

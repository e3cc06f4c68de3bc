//! Unified error handling for HTTP services.
//!
//! Provides a single error type shared by ports, application services and
//! inbound adapters, with conversion to Axum HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Conflict
    #[error("User '{0}' already exists")]
    UserAlreadyExists(String),

    // Outbound adapter errors
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Event publish error: {0}")]
    EventPublish(String),

    #[error("Service unavailable")]
    ServiceUnavailable(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::EventPublish(_) => "EVENT_PUBLISH_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Persistence(_) | AppError::EventPublish(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for server-side failures
            AppError::Persistence(msg) => {
                tracing::error!("Persistence error: {}", msg);
                "A storage error occurred".to_string()
            }
            AppError::EventPublish(msg) => {
                tracing::error!("Event publish error: {}", msg);
                "An event delivery error occurred".to_string()
            }
            AppError::ServiceUnavailable(service) => {
                tracing::error!("Service unavailable: {}", service);
                format!("Service {} is unavailable", service)
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

// =============================================================================
// Infrastructure Error Conversion
// =============================================================================

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Persistence(err.to_string())
    }
}

#[cfg(feature = "events")]
impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::EventPublish(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn user_already_exists(username: impl Into<String>) -> Self {
        AppError::UserAlreadyExists(username.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn event_publish(msg: impl Into<String>) -> Self {
        AppError::EventPublish(msg.into())
    }

    pub fn service_unavailable(service: impl Into<String>) -> Self {
        AppError::ServiceUnavailable(service.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let (status, body) = body_json(AppError::validation("Username must not be blank")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Username must not be blank");
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let (status, body) = body_json(AppError::user_already_exists("johndoe")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "USER_ALREADY_EXISTS");
        assert_eq!(body["error"]["message"], "User 'johndoe' already exists");
    }

    #[tokio::test]
    async fn test_persistence_error_hides_details() {
        let (status, body) =
            body_json(AppError::persistence("connection refused: 10.0.0.3:5432")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "PERSISTENCE_ERROR");
        assert_eq!(body["error"]["message"], "A storage error occurred");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::validation("bad email").into();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "bad email"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_service_unavailable_response() {
        let (status, body) = body_json(AppError::service_unavailable("redis")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
        assert_eq!(body["error"]["message"], "Service redis is unavailable");
    }
}

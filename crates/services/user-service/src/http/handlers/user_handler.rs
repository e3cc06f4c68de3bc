//! User registration handlers.

use std::borrow::Cow;

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use common::AppResult;

use crate::http::extractors::ValidatedJson;
use crate::http::AppState;
use crate::service::{CreateUserCommand, UserResult};

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Unique login name (at least 3 characters)
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "johndoe", min_length = 3)]
    pub username: String,
    /// Contact email address
    #[validate(email(message = "must be a valid email address"))]
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl From<CreateUserRequest> for CreateUserCommand {
    fn from(req: CreateUserRequest) -> Self {
        CreateUserCommand::new(req.username, req.email)
    }
}

/// Registered user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserResult> for UserResponse {
    fn from(user: UserResult) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            enabled: user.enabled,
            created_at: user.created_at,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body or validation error"),
        (status = 409, description = "Username already taken"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.create_user.execute(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

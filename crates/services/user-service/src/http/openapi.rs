//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::http::handlers::user_handler::{CreateUserRequest, UserResponse};
use domain::UserCreatedEvent;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "1.0.0",
        description = "User registration with domain event publication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(crate::http::handlers::user_handler::create_user),
    components(schemas(CreateUserRequest, UserResponse, UserCreatedEvent)),
    tags(
        (name = "Users", description = "User registration endpoints"),
    )
)]
pub struct ApiDoc;

//! Application services layer - Use cases.
//!
//! Services orchestrate domain logic and outbound ports to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod create_user;

pub use create_user::{CreateUserCommand, CreateUserService, CreateUserUseCase, UserResult};

#[cfg(any(test, feature = "test-utils"))]
pub use create_user::MockCreateUserUseCase;

//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `User` aggregate, its `Username` and `Email` value objects, and the
//! `UserCreatedEvent` it gives rise to.

pub mod constants;
pub mod email;
pub mod error;
pub mod events;
pub mod user;
pub mod username;

pub use constants::*;
pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use events::UserCreatedEvent;
pub use user::User;
pub use username::Username;

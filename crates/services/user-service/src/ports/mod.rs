//! Outbound ports.
//!
//! Interfaces the application core depends on. Adapters in `repository` and
//! `events` implement them; the application never sees a concrete type.

mod event_publisher;
mod user_repository;

pub use event_publisher::EventPublisher;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use event_publisher::MockEventPublisher;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

//! Persistence adapters implementing the [`UserRepository`](crate::ports::UserRepository) port.

pub mod entities;
mod memory;
mod user_repository;

pub use memory::InMemoryUserRepository;
pub use user_repository::UserStore;

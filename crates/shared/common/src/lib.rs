//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling with HTTP response mapping
//! - Configuration structures for databases, the event bus and HTTP services

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};

//! Application state shared across handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::CreateUserUseCase;

/// Application state containing the use cases the HTTP adapter drives.
#[derive(Clone)]
pub struct AppState {
    /// Create-user use case
    pub create_user: Arc<dyn CreateUserUseCase>,
    /// Database connection, present only when users are stored in PostgreSQL
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create new app state.
    pub fn new(create_user: Arc<dyn CreateUserUseCase>, database: Option<Arc<Database>>) -> Self {
        Self {
            create_user,
            database,
        }
    }
}

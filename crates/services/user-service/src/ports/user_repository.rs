//! Repository port for the user aggregate.

use async_trait::async_trait;

use common::AppResult;
use domain::{User, Username};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User persistence port.
///
/// Implementations must enforce username uniqueness at the storage level and
/// report a violation from `save` as `AppError::UserAlreadyExists`; other
/// failures are `AppError::Persistence`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether a user with this username is already stored
    async fn exists_by_username(&self, username: &Username) -> AppResult<bool>;

    /// Insert a new user (never updates an existing record)
    async fn save(&self, user: &User) -> AppResult<User>;
}

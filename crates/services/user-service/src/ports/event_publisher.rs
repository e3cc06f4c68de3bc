//! Event publisher port.

use async_trait::async_trait;

use common::AppResult;
use domain::UserCreatedEvent;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Outbound notification port for domain events.
///
/// Errors are reported as `AppError::EventPublish`. Callers treat delivery as
/// best effort: a failed publish never undoes the change that produced the
/// event.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Deliver a user-created event
    async fn publish(&self, event: UserCreatedEvent) -> AppResult<()>;
}

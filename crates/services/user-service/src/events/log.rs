//! Log-only event publisher.

use async_trait::async_trait;

use crate::ports::EventPublisher;
use common::AppResult;
use domain::UserCreatedEvent;

/// Writes each event as a structured log record and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventPublisher;

impl LogEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LogEventPublisher {
    async fn publish(&self, event: UserCreatedEvent) -> AppResult<()> {
        tracing::info!(
            target: "user_events",
            user_id = %event.id(),
            username = %event.username(),
            email = %event.email(),
            occurred_at = %event.occurred_at(),
            "UserCreated"
        );
        Ok(())
    }
}

//! In-memory event publisher.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::EventPublisher;
use common::AppResult;
use domain::UserCreatedEvent;

/// Keeps every published event in memory, in publish order.
#[derive(Debug, Default)]
pub struct InMemoryEventPublisher {
    events: Mutex<Vec<UserCreatedEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events published so far
    pub async fn events(&self) -> Vec<UserCreatedEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: UserCreatedEvent) -> AppResult<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

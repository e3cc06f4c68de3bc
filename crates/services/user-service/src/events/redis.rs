//! Redis pub/sub event publisher.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};

use crate::ports::EventPublisher;
use common::{AppError, AppResult, EventBusConfig};
use domain::UserCreatedEvent;

/// Publishes events as JSON on a Redis channel.
#[derive(Clone)]
pub struct RedisEventPublisher {
    connection: ConnectionManager,
    channel: String,
}

impl RedisEventPublisher {
    /// Connect to Redis.
    ///
    /// # Errors
    /// Returns `ServiceUnavailable` if the client cannot be created or the
    /// initial connection fails.
    pub async fn connect(config: &EventBusConfig) -> AppResult<Self> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| AppError::service_unavailable(format!("redis ({})", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::service_unavailable(format!("redis ({})", e)))?;

        tracing::info!(channel = %config.channel, "Redis event publisher connected");

        Ok(Self {
            connection,
            channel: config.channel.clone(),
        })
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: UserCreatedEvent) -> AppResult<()> {
        let payload = encode(&event)?;

        let mut conn = self.connection.clone();
        let receivers: i64 = conn.publish(&self.channel, payload).await?;

        tracing::debug!(
            user_id = %event.id(),
            channel = %self.channel,
            receivers,
            "User created event published"
        );

        Ok(())
    }
}

/// Serialize an event into its wire representation.
fn encode(event: &UserCreatedEvent) -> AppResult<String> {
    serde_json::to_string(event)
        .map_err(|e| AppError::event_publish(format!("Event serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::User;

    #[test]
    fn test_encode_uses_wire_field_names() {
        let user = User::try_new("johndoe", "john@example.com").unwrap();
        let event = UserCreatedEvent::for_user(&user, chrono::Utc::now());

        let payload = encode(&event).unwrap();
        let decoded: UserCreatedEvent = serde_json::from_str(&payload).unwrap();

        assert!(payload.contains("\"occurredAt\""));
        assert_eq!(decoded, event);
    }
}

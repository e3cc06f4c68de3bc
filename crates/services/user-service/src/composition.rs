//! Composition root.
//!
//! Binds each outbound port to exactly one adapter, chosen from the typed
//! backend selections in [`UserServiceConfig`], and hands the wired use case
//! to the HTTP adapter.

use std::sync::Arc;

use tracing::{info, warn};

use common::AppResult;

use crate::config::{PublisherBackend, RepositoryBackend, UserServiceConfig};
use crate::events::{InMemoryEventPublisher, LogEventPublisher, RedisEventPublisher};
use crate::http::AppState;
use crate::infra::Database;
use crate::ports::{EventPublisher, UserRepository};
use crate::repository::{InMemoryUserRepository, UserStore};
use crate::service::CreateUserService;

/// Build the application state for the configured backends.
pub async fn build_state(config: &UserServiceConfig) -> AppResult<AppState> {
    let (repo, database): (Arc<dyn UserRepository>, Option<Arc<Database>>) =
        match config.repository {
            RepositoryBackend::Postgres => {
                let db = Arc::new(Database::connect(&config.database).await?);
                (Arc::new(UserStore::new(db.get_connection())), Some(db))
            }
            RepositoryBackend::Memory => (Arc::new(InMemoryUserRepository::new()), None),
        };

    let publisher: Arc<dyn EventPublisher> = match config.publisher {
        PublisherBackend::Redis => match RedisEventPublisher::connect(&config.events).await {
            Ok(redis) => Arc::new(redis),
            // A missing broker degrades to log-only delivery
            Err(e) => {
                warn!(error = %e, "Event bus unreachable, falling back to log publisher");
                Arc::new(LogEventPublisher::new())
            }
        },
        PublisherBackend::Log => Arc::new(LogEventPublisher::new()),
        PublisherBackend::Memory => Arc::new(InMemoryEventPublisher::new()),
    };

    info!(
        repository = %config.repository,
        publisher = %config.publisher,
        "Adapters bound"
    );

    let create_user = Arc::new(CreateUserService::new(repo, publisher));
    Ok(AppState::new(create_user, database))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserServiceConfig;
    use crate::service::CreateUserCommand;

    #[tokio::test]
    async fn test_in_memory_profile_needs_no_infrastructure() {
        let state = build_state(&UserServiceConfig::in_memory()).await.unwrap();

        assert!(state.database.is_none());
        let created = state
            .create_user
            .execute(CreateUserCommand::new("johndoe", "john@example.com"))
            .await
            .unwrap();
        assert_eq!(created.username, "johndoe");
    }

    #[tokio::test]
    async fn test_log_publisher_profile() {
        let config = UserServiceConfig {
            publisher: PublisherBackend::Log,
            ..UserServiceConfig::in_memory()
        };
        let state = build_state(&config).await.unwrap();

        let first = state
            .create_user
            .execute(CreateUserCommand::new("johndoe", "john@example.com"))
            .await;
        let second = state
            .create_user
            .execute(CreateUserCommand::new("johndoe", "other@example.com"))
            .await;

        assert!(first.is_ok());
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_event_bus_falls_back_to_log() {
        let mut config = UserServiceConfig::in_memory();
        config.publisher = PublisherBackend::Redis;
        config.events.url = "not a redis url".to_string();

        let state = build_state(&config).await.unwrap();

        let created = state
            .create_user
            .execute(CreateUserCommand::new("johndoe", "john@example.com"))
            .await
            .unwrap();
        assert!(created.enabled);
    }
}

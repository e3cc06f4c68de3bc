//! Create-user use case.
//!
//! SOLID (SRP): Handles user registration only.
//! DDD: Validates through value objects, persists the aggregate, then
//! announces it with a domain event.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Email, User, UserCreatedEvent, Username};

use crate::ports::{EventPublisher, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Intention to register a user, as raw text from an inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub username: String,
    pub email: String,
}

impl CreateUserCommand {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Snapshot of a persisted user returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResult {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            enabled: user.is_enabled(),
            created_at: user.created_at(),
        }
    }
}

/// Create-user use case trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    /// Register a new user.
    ///
    /// # Errors
    /// - `Validation` if the username or email is malformed
    /// - `UserAlreadyExists` if the username is taken
    /// - `Persistence` if the user could not be stored
    async fn execute(&self, command: CreateUserCommand) -> AppResult<UserResult>;
}

/// Concrete implementation of the use case over the outbound ports.
pub struct CreateUserService {
    repo: Arc<dyn UserRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl CreateUserService {
    /// Create new service instance with its ports
    pub fn new(repo: Arc<dyn UserRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { repo, publisher }
    }
}

#[async_trait]
impl CreateUserUseCase for CreateUserService {
    async fn execute(&self, command: CreateUserCommand) -> AppResult<UserResult> {
        // Reject malformed input before touching any port
        let username = Username::parse(&command.username)?;
        let email = Email::parse(&command.email)?;

        if self.repo.exists_by_username(&username).await? {
            tracing::warn!(username = %username, "Username already taken");
            return Err(AppError::user_already_exists(username.into_string()));
        }

        let user = User::create(username, email);
        let saved = self.repo.save(&user).await?;
        tracing::info!(user_id = %saved.id(), username = %saved.username(), "User created");

        // Best effort: the user is committed whether or not the event goes out
        let event = UserCreatedEvent::for_user(&saved, Utc::now());
        if let Err(e) = self.publisher.publish(event).await {
            tracing::warn!(
                user_id = %saved.id(),
                error = %e,
                "Failed to publish user created event"
            );
        }

        Ok(UserResult::from(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockEventPublisher, MockUserRepository};
    use mockall::{predicate::function, Sequence};

    fn command(username: &str, email: &str) -> CreateUserCommand {
        CreateUserCommand::new(username, email)
    }

    fn service(repo: MockUserRepository, publisher: MockEventPublisher) -> CreateUserService {
        CreateUserService::new(Arc::new(repo), Arc::new(publisher))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut seq = Sequence::new();
        let mut repo = MockUserRepository::new();
        let mut publisher = MockEventPublisher::new();

        repo.expect_exists_by_username()
            .with(function(|u: &Username| u.as_str() == "johndoe"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        repo.expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|user| Ok(user.clone()));
        publisher
            .expect_publish()
            .withf(|event| {
                event.username().as_str() == "johndoe"
                    && event.email().as_str() == "john@example.com"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let result = service(repo, publisher)
            .execute(command("johndoe", "john@example.com"))
            .await
            .unwrap();

        assert_eq!(result.username, "johndoe");
        assert_eq!(result.email, "john@example.com");
        assert!(result.enabled);
    }

    #[tokio::test]
    async fn test_event_carries_persisted_identity() {
        let stored = User::try_new("johndoe", "john@example.com").unwrap();
        let stored_id = stored.id();

        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_save().returning(move |_| Ok(stored.clone()));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .withf(move |event| event.id() == stored_id)
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repo, publisher)
            .execute(command("johndoe", "john@example.com"))
            .await
            .unwrap();

        assert_eq!(result.id, stored_id);
    }

    #[tokio::test]
    async fn test_create_user_already_exists() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(true));
        repo.expect_save().never();

        let mut publisher = MockEventPublisher::new();
        publisher.expect_publish().never();

        let result = service(repo, publisher)
            .execute(command("johndoe", "john@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::UserAlreadyExists(ref name)) if name == "johndoe"));
    }

    #[tokio::test]
    async fn test_invalid_username_skips_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().never();
        repo.expect_save().never();

        let mut publisher = MockEventPublisher::new();
        publisher.expect_publish().never();

        let result = service(repo, publisher)
            .execute(command("jo", "john@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_invalid_email_skips_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().never();

        let result = service(repo, MockEventPublisher::new())
            .execute(command("johndoe", "john.example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_save_failure_publishes_nothing() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_save()
            .returning(|_| Err(AppError::persistence("connection reset")));

        let mut publisher = MockEventPublisher::new();
        publisher.expect_publish().never();

        let result = service(repo, publisher)
            .execute(command("johndoe", "john@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
    }

    #[tokio::test]
    async fn test_save_constraint_violation_is_conflict() {
        // Another request won the race between the check and the insert
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_save()
            .returning(|user| Err(AppError::user_already_exists(user.username().as_str())));

        let mut publisher = MockEventPublisher::new();
        publisher.expect_publish().never();

        let result = service(repo, publisher)
            .execute(command("johndoe", "john@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::UserAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_publish_failure_still_succeeds() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_save().times(1).returning(|user| Ok(user.clone()));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(AppError::event_publish("broker down")));

        let result = service(repo, publisher)
            .execute(command("johndoe", "john@example.com"))
            .await;

        tokio_test::assert_ok!(result);
    }

    #[tokio::test]
    async fn test_exists_check_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username()
            .returning(|_| Err(AppError::persistence("timeout")));
        repo.expect_save().never();

        let result = service(repo, MockEventPublisher::new())
            .execute(command("johndoe", "john@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
    }
}

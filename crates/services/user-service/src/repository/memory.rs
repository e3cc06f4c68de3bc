//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::UserRepository;
use common::{AppError, AppResult};
use domain::{User, Username};

/// Process-local implementation of [`UserRepository`].
///
/// Users are keyed by username, so uniqueness is re-checked under the write
/// lock on every insert, mirroring a database unique key.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Username, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Look up a stored user by username
    pub async fn get(&self, username: &Username) -> Option<User> {
        self.users.read().await.get(username).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_username(&self, username: &Username) -> AppResult<bool> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(user.username()) {
            return Err(AppError::user_already_exists(user.username().as_str()));
        }

        users.insert(user.username().clone(), user.clone());
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User::try_new(username, "john@example.com").unwrap()
    }

    #[tokio::test]
    async fn test_save_and_exists() {
        let repo = InMemoryUserRepository::new();
        let johndoe = Username::parse("johndoe").unwrap();

        assert!(!repo.exists_by_username(&johndoe).await.unwrap());

        let saved = repo.save(&user("johndoe")).await.unwrap();

        assert!(repo.exists_by_username(&johndoe).await.unwrap());
        assert_eq!(repo.get(&johndoe).await, Some(saved));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_exists_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("johndoe")).await.unwrap();
        let johndoe = Username::parse("johndoe").unwrap();
        let janedoe = Username::parse("janedoe").unwrap();

        for _ in 0..2 {
            assert!(repo.exists_by_username(&johndoe).await.unwrap());
            assert!(!repo.exists_by_username(&janedoe).await.unwrap());
        }
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_username() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("johndoe")).await.unwrap();

        let result = repo.save(&user("johndoe")).await;

        assert!(matches!(result, Err(AppError::UserAlreadyExists(_))));
        assert_eq!(repo.len().await, 1);
    }
}

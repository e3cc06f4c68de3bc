//! User aggregate root.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::DEFAULT_USER_ENABLED;
use crate::email::Email;
use crate::error::DomainResult;
use crate::username::Username;

/// User aggregate.
///
/// DDD: Aggregate root. Can only be built from valid value objects, so an
/// invalid `User` is unrepresentable. There are no setters; state is read
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    username: Username,
    email: Email,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, enabled user with a freshly generated identifier.
    pub fn create(username: Username, email: Email) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            enabled: DEFAULT_USER_ENABLED,
            created_at: Utc::now(),
        }
    }

    /// Create a user from raw input.
    ///
    /// The username is validated before the email; the first failure wins.
    pub fn try_new(username: &str, email: &str) -> DomainResult<Self> {
        let username = Username::parse(username)?;
        let email = Email::parse(email)?;
        Ok(Self::create(username, email))
    }

    /// Rebuild a user from stored state (e.g. a database row).
    pub fn restore(
        id: Uuid,
        username: Username,
        email: Email,
        enabled: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            enabled,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Check if the account is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

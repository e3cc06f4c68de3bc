//! Domain events emitted by the user aggregate lifecycle.
//!
//! Events are transport agnostic; outbound adapters decide how they are
//! encoded and where they are delivered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::email::Email;
use crate::user::User;
use crate::username::Username;

/// Event emitted once a user has been persisted.
///
/// Immutable: built once from the stored aggregate and then moved into the
/// publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedEvent {
    /// Identifier of the created user
    id: Uuid,
    /// Username of the created user
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "johndoe"))]
    username: Username,
    /// Email of the created user
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "john@example.com"))]
    email: Email,
    /// When the creation was committed
    occurred_at: DateTime<Utc>,
}

impl UserCreatedEvent {
    /// Build the event for a user that has just been stored.
    pub fn for_user(user: &User, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: user.id(),
            username: user.username().clone(),
            email: user.email().clone(),
            occurred_at,
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

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

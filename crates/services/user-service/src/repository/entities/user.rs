//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, Email, User, Username};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert a stored row back into the domain aggregate.
    ///
    /// Stored values are re-validated; a row that no longer satisfies the
    /// value object rules is reported rather than silently accepted.
    pub fn into_domain(self) -> DomainResult<User> {
        Ok(User::restore(
            self.id,
            Username::parse(&self.username)?,
            Email::parse(&self.email)?,
            self.enabled,
            self.created_at,
        ))
    }
}

/// Convert domain aggregate to an insertable model
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id()),
            username: Set(user.username().to_string()),
            email: Set(user.email().to_string()),
            enabled: Set(user.is_enabled()),
            created_at: Set(user.created_at()),
        }
    }
}

//! SeaORM user repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::ports::UserRepository;
use common::{AppError, AppResult};
use domain::{User, Username};

/// Relational implementation of [`UserRepository`].
///
/// Uniqueness of `username` is backed by a unique key on the `users` table,
/// so a concurrent insert that slips past the existence check still fails.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn exists_by_username(&self, username: &Username) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Username.eq(username.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        let model = ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, user.username()))?;

        tracing::debug!(user_id = %model.id, "User row inserted");

        model
            .into_domain()
            .map_err(|e| AppError::persistence(format!("Stored user is invalid: {}", e)))
    }
}

/// Translate insert failures, turning a unique-key violation into a conflict.
fn map_insert_error(err: DbErr, username: &Username) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(username = %username, %detail, "Unique constraint rejected insert");
            AppError::user_already_exists(username.as_str())
        }
        _ => AppError::from(err),
    }
}

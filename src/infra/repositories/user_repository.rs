//! SeaORM-backed user repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use uuid::Uuid;

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserRepository};
use crate::errors::{AppError, AppResult};

/// Insert a user over any SeaORM connection (pooled or transactional).
pub(crate) async fn insert_user<C: ConnectionTrait>(conn: &C, user: User) -> AppResult<()> {
    let active_model = ActiveModel {
        id: Set(user.id),
        lastname: Set(user.lastname.clone()),
        firstname: Set(user.firstname.clone()),
        email: Set(user.email.as_str().to_string()),
        password: Set(user.password.as_str().to_string()),
        created_at: Set(user.created_at),
    };

    active_model.insert(conn).await.map_err(into_store_error)?;
    Ok(())
}

/// Look up a user by its string identifier over any SeaORM connection.
pub(crate) async fn find_user<C: ConnectionTrait>(conn: &C, id: &str) -> AppResult<User> {
    let id = Uuid::parse_str(id).map_err(|_| AppError::bad_request("invalid user id"))?;

    let model = UserEntity::find_by_id(id)
        .one(conn)
        .await
        .map_err(into_store_error)?
        .ok_or(AppError::NotFound)?;

    User::try_from(model)
}

/// Map store-level errors, surfacing unique-key violations as conflicts.
fn into_store_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
        _ => AppError::from(err),
    }
}

/// Concrete implementation of [`UserRepository`] over a connection pool.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create_user(&self, user: User) -> AppResult<()> {
        insert_user(&self.db, user).await
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        find_user(&self.db, id).await
    }
}

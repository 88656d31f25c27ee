//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub lastname: String,
    pub firstname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Rows predate none of the entity invariants (the factory validated
/// them at write time), but the conversion still goes through
/// `User::new` so a corrupted row surfaces as an error instead of a
/// malformed entity.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        User::new(
            model.id,
            model.lastname,
            model.firstname,
            &model.email,
            &model.password,
            model.created_at,
        )
    }
}

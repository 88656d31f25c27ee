//! Transport-facing request shapes.
//!
//! Each request type declares its own field constraints and knows how
//! to convert itself into domain input. Requests are one-way
//! converters: they never wrap or alias an entity.

use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::User;
use crate::errors::AppResult;
use crate::validation::{collect_violations, Violation};

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserCreateRequest {
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "Doe")]
    pub lastname: String,
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "John")]
    pub firstname: String,
    #[validate(email)]
    #[schema(example = "john.doe@test.com")]
    pub email: String,
    #[validate(length(min = 8, code = "min"))]
    pub password: String,
}

impl UserCreateRequest {
    /// Field declaration order, keeps violation reports stable.
    const FIELDS: &'static [&'static str] = &["lastname", "firstname", "email", "password"];

    /// Check the declared constraints; an empty list means valid.
    pub fn violations(&self) -> Vec<Violation> {
        collect_violations(self, Self::FIELDS)
    }

    /// Convert into a user entity with a fresh id and the current
    /// instant as creation time.
    pub fn into_entity(self) -> AppResult<User> {
        User::new(
            Uuid::new_v4(),
            self.lastname,
            self.firstname,
            &self.email,
            &self.password,
            Utc::now(),
        )
    }
}

/// Query shape for fetching a user by identifier.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GetUserRequest {
    #[validate(regex(path = *crate::validation::UUID_V4, code = "uuid4"))]
    pub id: String,
}

impl GetUserRequest {
    const FIELDS: &'static [&'static str] = &["id"];

    /// Check the declared constraints; an empty list means valid.
    pub fn violations(&self) -> Vec<Violation> {
        collect_violations(self, Self::FIELDS)
    }
}

//! User domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Email, Password};
use crate::errors::AppResult;

/// User aggregate root.
///
/// Built only through [`User::new`]. The id and creation instant are
/// set exactly once, at construction; a changed user is a replacement
/// value, never an in-place mutation.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub lastname: String,
    pub firstname: String,
    pub email: Email,
    #[serde(skip_serializing)]
    pub password: Password,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user entity.
    ///
    /// The raw email and password are wrapped into their value objects
    /// here, making construction the single point where their
    /// invariants are enforced.
    pub fn new(
        id: Uuid,
        lastname: impl Into<String>,
        firstname: impl Into<String>,
        email: &str,
        password: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            lastname: lastname.into(),
            firstname: firstname.into(),
            email: Email::new(email)?,
            password: Password::new(password)?,
            created_at,
        })
    }

    /// User full name: `"{firstname} {lastname}"`, trimmed so an empty
    /// part never leaves a stray space.
    pub fn fullname(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

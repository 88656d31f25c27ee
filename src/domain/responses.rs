//! Transport-facing response shapes.
//!
//! Field names and formatting are part of the wire contract: every
//! field is a string, timestamps pre-formatted as RFC 3339.

use serde::Serialize;
use utoipa::ToSchema;

use super::User;

/// User representation returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GetUserResponse {
    pub id: String,
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for GetUserResponse {
    fn from(user: &User) -> Self {
        let created_at = user.created_at.to_rfc3339();
        Self {
            id: user.id.to_string(),
            lastname: user.lastname.clone(),
            firstname: user.firstname.clone(),
            email: user.email.as_str().to_string(),
            // The entity is replacement-only, so the last update is
            // its construction instant.
            updated_at: created_at.clone(),
            created_at,
        }
    }
}

/// Representation returned after a successful login.
///
/// The token and expiry are produced by an authentication adapter and
/// arrive pre-formatted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub id: String,
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub token: String,
    pub expired_at: String,
}

impl LoginResponse {
    pub fn new(user: &User, token: impl Into<String>, expired_at: impl Into<String>) -> Self {
        Self {
            id: user.id.to_string(),
            lastname: user.lastname.clone(),
            firstname: user.firstname.clone(),
            email: user.email.as_str().to_string(),
            token: token.into(),
            expired_at: expired_at.into(),
        }
    }
}

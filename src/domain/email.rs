//! Email value object.

use serde::Serialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::validation::collect_violations;

/// Email address guaranteed syntactically valid once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(transparent)]
pub struct Email {
    #[validate(email)]
    value: String,
}

impl Email {
    /// Create a new email, failing when the syntax is invalid.
    ///
    /// Running the constraint check here means an entity can never
    /// hold an unvalidated address.
    pub fn new(value: &str) -> AppResult<Self> {
        let email = Self {
            value: value.to_string(),
        };

        let violations = collect_violations(&email, &["value"]);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        Ok(email)
    }

    /// The wrapped address, verbatim.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

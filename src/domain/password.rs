//! Password value object.
//!
//! Wraps the stored credential string. The value is kept verbatim and
//! never serialized; hashing before persistence is an adapter-level
//! concern outside the domain.

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::validation::collect_violations;

/// Credential value of at least [`MIN_PASSWORD_LENGTH`] characters.
///
/// [`MIN_PASSWORD_LENGTH`]: crate::config::MIN_PASSWORD_LENGTH
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct Password {
    #[validate(length(min = 8, code = "min"))]
    value: String,
}

// Don't expose the credential in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password, failing when it is shorter than the
    /// minimum length.
    pub fn new(value: &str) -> AppResult<Self> {
        let password = Self {
            value: value.to_string(),
        };

        let violations = collect_violations(&password, &["value"]);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        Ok(password)
    }

    /// The wrapped value, verbatim.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the wrapped value.
    pub fn into_string(self) -> String {
        self.value
    }
}

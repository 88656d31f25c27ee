//! Declarative struct validation built on the `validator` crate.
//!
//! Constraints are declared once per field with `#[validate(...)]`
//! attributes and interpreted uniformly here, so format and length
//! rules are never duplicated across entity and request types. The
//! engine reports every violated constraint as a structured
//! [`Violation`] instead of failing on the first one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Version 4 UUID, hyphenated form.
pub static UUID_V4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("UUID v4 regex is well-formed")
});

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Name of the failing field
    pub field: String,
    /// Constraint tag that failed (`required`, `email`, `min`, `uuid4`)
    pub constraint: String,
    /// Constraint parameter, e.g. the minimum length
    #[serde(skip_serializing_if = "String::is_empty")]
    pub param: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        constraint: impl Into<String>,
        param: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
            param: param.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.param.is_empty() {
            write!(f, "{}: {}", self.field, self.constraint)
        } else {
            write!(f, "{}: {} {}", self.field, self.constraint, self.param)
        }
    }
}

/// Run a struct's declared constraints and flatten the outcome into a
/// list ordered by `fields`, the declaration order of the struct.
///
/// An empty list means the value is valid. Fields without constraints
/// never appear; multiple violated constraints on one field each yield
/// a separate entry. A constraint that fails because the field is
/// empty is reported as `required`, matching the short-circuit
/// behavior callers expect from required-then-format rule chains.
pub fn collect_violations<T: Validate>(value: &T, fields: &[&str]) -> Vec<Violation> {
    let Err(errors) = value.validate() else {
        return Vec::new();
    };

    let field_errors = errors.field_errors();
    let mut violations = Vec::new();
    for field in fields {
        let Some(errs) = field_errors.get(*field) else {
            continue;
        };
        for err in errs.iter() {
            violations.push(into_violation(field, err));
        }
    }
    violations.dedup();
    violations
}

fn into_violation(field: &str, err: &ValidationError) -> Violation {
    if offending_value_is_empty(err) {
        return Violation::new(field, "required", "");
    }
    Violation::new(field, err.code.to_string(), constraint_param(err))
}

fn offending_value_is_empty(err: &ValidationError) -> bool {
    err.params
        .get("value")
        .and_then(|value| value.as_str())
        .is_some_and(str::is_empty)
}

/// Extract the constraint parameter (e.g. a minimum length) from the
/// validator error, as a plain string for the wire.
fn constraint_param(err: &ValidationError) -> String {
    for key in ["min", "max", "equal"] {
        if let Some(value) = err.params.get(key) {
            return match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
    }
    String::new()
}

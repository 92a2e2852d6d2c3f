//! Validation outcomes and rule violations
//!
//! Every rejection in the engine is returned as data. Callers get the full
//! list of violations from one pass and decide how to present them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schemas::PostStatus;

/// A single violated rule, addressable by field path
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleError {
    /// A single field failed one of its own rules
    #[error("{field}: {message}")]
    Field { field: String, message: String },

    /// A field failed a rule that depends on another field
    #[error("{field}: {message}")]
    CrossField {
        field: String,
        depends_on: String,
        message: String,
    },

    /// A lifecycle change violated a precondition
    #[error("cannot move from {from} to {to}: {message}")]
    Transition {
        from: PostStatus,
        to: PostStatus,
        message: String,
    },
}

impl RuleError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        RuleError::Field {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn cross_field(
        field: impl Into<String>,
        depends_on: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RuleError::CrossField {
            field: field.into(),
            depends_on: depends_on.into(),
            message: message.into(),
        }
    }

    pub fn transition(from: PostStatus, to: PostStatus, message: impl Into<String>) -> Self {
        RuleError::Transition {
            from,
            to,
            message: message.into(),
        }
    }

    /// Field path the error is attached to. Transition errors attach to `status`.
    pub fn path(&self) -> &str {
        match self {
            RuleError::Field { field, .. } | RuleError::CrossField { field, .. } => field,
            RuleError::Transition { .. } => "status",
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            RuleError::Field { message, .. }
            | RuleError::CrossField { message, .. }
            | RuleError::Transition { message, .. } => message,
        }
    }

    /// Stable machine code for the error class
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::Field { .. } => "FIELD_ERROR",
            RuleError::CrossField { .. } => "CROSS_FIELD_ERROR",
            RuleError::Transition { .. } => "TRANSITION_ERROR",
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, RuleError::Transition { .. })
    }
}

/// Outcome of validating a value: the normalized value, or every violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", content = "value", rename_all = "snake_case")]
pub enum ValidationResult<T> {
    Accepted(T),
    Rejected(Vec<RuleError>),
}

impl<T> ValidationResult<T> {
    /// Accept `value` when `errors` is empty, otherwise reject with all of them
    pub fn from_errors(value: T, errors: Vec<RuleError>) -> Self {
        if errors.is_empty() {
            ValidationResult::Accepted(value)
        } else {
            ValidationResult::Rejected(errors)
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ValidationResult::Rejected(_))
    }

    /// The accepted value, if any
    pub fn value(self) -> Option<T> {
        match self {
            ValidationResult::Accepted(value) => Some(value),
            ValidationResult::Rejected(_) => None,
        }
    }

    /// All violations; empty when accepted
    pub fn errors(&self) -> &[RuleError] {
        match self {
            ValidationResult::Accepted(_) => &[],
            ValidationResult::Rejected(errors) => errors,
        }
    }

    /// Violations attached to one field path
    pub fn errors_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a RuleError> + 'a {
        self.errors().iter().filter(move |e| e.path() == path)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
        match self {
            ValidationResult::Accepted(value) => ValidationResult::Accepted(f(value)),
            ValidationResult::Rejected(errors) => ValidationResult::Rejected(errors),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, Vec<RuleError>> {
        match self {
            ValidationResult::Accepted(value) => Ok(value),
            ValidationResult::Rejected(errors) => Err(errors),
        }
    }
}

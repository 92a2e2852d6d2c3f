//! Error types for the postflow CLI and file layer
//!
//! Rule violations are data ([`RuleError`]); this type covers everything
//! around the engine. Each variant has a code for programmatic handling.

use thiserror::Error;

use crate::domain::RuleError;

/// Result type alias for postflow operations
pub type Result<T> = std::result::Result<T, PostflowError>;

/// Main error type for operations outside the rule engine
#[derive(Debug, Error)]
pub enum PostflowError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unrecognized field, status or credential kind name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The submission was rejected by the rule engine
    #[error("Rejected with {} violation(s)", .0.len())]
    Rejected(Vec<RuleError>),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PostflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            PostflowError::InvalidJson(_) => "INVALID_JSON",
            PostflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            PostflowError::ConfigError(_) => "CONFIG_ERROR",
            PostflowError::InvalidArgument(_) => "INVALID_ARGUMENT",
            PostflowError::Rejected(_) => "REJECTED",
            PostflowError::Io(_) => "IO_ERROR",
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &PostflowError) -> i32 {
    match error {
        PostflowError::Rejected(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PostflowError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(PostflowError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(PostflowError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(PostflowError::InvalidArgument("test".into()).code(), "INVALID_ARGUMENT");
        assert_eq!(PostflowError::Rejected(vec![]).code(), "REJECTED");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&PostflowError::Rejected(vec![])), 2);
        assert_eq!(to_exit_code(&PostflowError::FileNotFound("test".into())), 1);
    }

    #[test]
    fn test_rejected_message_counts_violations() {
        let err = PostflowError::Rejected(vec![
            RuleError::field("title", "Title is required"),
            RuleError::field("slug", "Slug is required"),
        ]);
        assert_eq!(err.to_string(), "Rejected with 2 violation(s)");
    }
}

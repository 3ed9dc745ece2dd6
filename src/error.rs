//! Custom error types for seedlock
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every terminal state of the decrypt path
//! maps to exactly one variant.

use thiserror::Error;

/// The main error type for seedlock operations
#[derive(Error, Debug)]
pub enum SeedlockError {
    /// Bad input shape, detected before any cryptography runs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed, truncated or undecodable blob
    #[error("Invalid blob format: {0}")]
    Format(String),

    /// Tag verification failed; almost always a wrong password
    #[error("Wrong password or corrupted data")]
    Authentication,

    /// Blob carries a version byte no decoder understands
    #[error("Unsupported encryption version: {0}")]
    UnsupportedVersion(u8),

    /// Underlying cipher or key derivation failure
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SeedlockError {
    /// Shorthand for a format error
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format(reason.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Whether re-prompting the user can fix this error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Authentication)
    }
}

impl From<std::io::Error> for SeedlockError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SeedlockError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for seedlock operations
pub type SeedlockResult<T> = Result<T, SeedlockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeedlockError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_authentication_display_is_stable() {
        assert_eq!(
            SeedlockError::Authentication.to_string(),
            "Wrong password or corrupted data"
        );
    }

    #[test]
    fn test_unsupported_version_names_version() {
        let err = SeedlockError::UnsupportedVersion(99);
        assert_eq!(err.to_string(), "Unsupported encryption version: 99");
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(SeedlockError::Validation("x".into()).is_retryable());
        assert!(SeedlockError::Authentication.is_retryable());
        assert!(!SeedlockError::format("short").is_retryable());
        assert!(!SeedlockError::UnsupportedVersion(7).is_retryable());
        assert!(!SeedlockError::Encryption("boom".into()).is_retryable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SeedlockError = io_err.into();
        assert!(matches!(err, SeedlockError::Io(_)));
    }
}

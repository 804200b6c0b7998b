//! Application-wide error types.
//!
//! Every module error in the workspace converts into [`AppError`], which
//! carries the three recoverable categories of the bookkeeping core
//! (invalid input, not found, storage unavailable) plus conflicts and
//! internal failures.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed amount, date, rate or other user-entered text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced contact or record is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The persistence store could not be reached or failed.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Conflict (e.g., duplicate contact name).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code shown alongside user-facing messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller can recover locally (re-prompt, offer to
    /// create the missing contact) rather than abort the operation.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotFound(_) | Self::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::InvalidInput(String::new()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::StorageUnavailable(String::new()).error_code(),
            "STORAGE_UNAVAILABLE"
        );
        assert_eq!(AppError::Conflict(String::new()).error_code(), "CONFLICT");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_recoverable_categories() {
        assert!(AppError::InvalidInput(String::new()).is_recoverable());
        assert!(AppError::NotFound(String::new()).is_recoverable());
        assert!(AppError::Conflict(String::new()).is_recoverable());
        assert!(!AppError::StorageUnavailable(String::new()).is_recoverable());
        assert!(!AppError::Internal(String::new()).is_recoverable());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::InvalidInput("msg".into()).to_string(),
            "Invalid input: msg"
        );
        assert_eq!(
            AppError::NotFound("msg".into()).to_string(),
            "Not found: msg"
        );
        assert_eq!(
            AppError::StorageUnavailable("msg".into()).to_string(),
            "Storage unavailable: msg"
        );
        assert_eq!(
            AppError::Conflict("msg".into()).to_string(),
            "Conflict: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }
}

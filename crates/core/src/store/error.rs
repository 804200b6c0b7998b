//! Storage error types.

use compta_shared::AppError;
use thiserror::Error;

/// Errors reported by a [`LedgerStore`](super::LedgerStore) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store cannot be reached or the operation failed inside it.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// No record with this identifier.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Record kind (`contact`, `expense`, ...).
        entity: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// Write would break a uniqueness rule.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    /// Shorthand for [`StoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => Self::StorageUnavailable(msg),
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Conflict(msg) => Self::Conflict(msg),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_onto_app_error() {
        let app: AppError = StoreError::Unavailable("disk full".into()).into();
        assert_eq!(app.error_code(), "STORAGE_UNAVAILABLE");

        let app: AppError = StoreError::not_found("expense", 42).into();
        assert_eq!(app.error_code(), "NOT_FOUND");
        assert_eq!(app.to_string(), "Not found: expense not found: 42");

        let app: AppError = StoreError::Conflict("duplicate".into()).into();
        assert_eq!(app.error_code(), "CONFLICT");
    }
}

//! Database error types.

use compta_core::store::StoreError;
use compta_shared::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised by repositories and the SQLite store.
#[derive(Debug, Error)]
pub enum DbError {
    /// SeaORM or the driver failed.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// The runtime driving SeaORM could not be started.
    #[error("Could not start the database runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// No row with this identifier.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Record kind.
        entity: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// Write would break a uniqueness rule.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A stored row cannot be turned back into a domain record.
    #[error("Invalid stored {entity} {id}: {reason}")]
    CorruptRow {
        /// Record kind.
        entity: &'static str,
        /// Row identifier.
        id: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl DbError {
    /// Shorthand for [`DbError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Shorthand for [`DbError::CorruptRow`].
    pub fn corrupt(entity: &'static str, id: impl ToString, reason: impl ToString) -> Self {
        Self::CorruptRow {
            entity,
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => Self::NotFound { entity, id },
            DbError::Conflict(msg) => Self::Conflict(msg),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        StoreError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            StoreError::from(DbError::not_found("expense", "abc")),
            StoreError::not_found("expense", "abc")
        );
        assert_eq!(
            StoreError::from(DbError::Conflict("taken".into())),
            StoreError::Conflict("taken".into())
        );
        assert!(matches!(
            StoreError::from(DbError::Database(DbErr::Custom("disk".into()))),
            StoreError::Unavailable(msg) if msg.contains("disk")
        ));
        assert!(matches!(
            StoreError::from(DbError::corrupt("receipt", 1, "bad payment method")),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_app_error_codes() {
        assert_eq!(AppError::from(DbError::not_found("contact", "x")).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::from(DbError::Database(DbErr::Custom("down".into()))).error_code(),
            "STORAGE_UNAVAILABLE"
        );
    }
}

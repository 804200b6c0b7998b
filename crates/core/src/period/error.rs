//! Period error types.

use compta_shared::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while building or persisting a period.
#[derive(Debug, Error)]
pub enum PeriodError {
    /// Month ordinal outside `1..=12`.
    #[error("Invalid month number: {0}")]
    InvalidMonth(u32),

    /// Month name is not one of the canonical French names.
    #[error("Unknown month name: '{0}'")]
    UnknownMonthName(String),

    /// Year is not a number in `1..=9999`.
    #[error("Invalid year: '{0}'")]
    InvalidYear(String),

    /// Reading or writing the stored period failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        match err {
            PeriodError::Store(store) => store.into(),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

//! Report error types.

use compta_shared::AppError;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Loading the records failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The renderer could not encode the document.
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Ledger(ledger) => ledger.into(),
            ReportError::Render(msg) => Self::Internal(msg),
        }
    }
}

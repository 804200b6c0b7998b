//! Ledger error types.

use compta_shared::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while loading or interpreting ledger records.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Payment method text is not one of `null`, `chèque`, `virement`.
    #[error("Unknown payment method: '{0}'")]
    UnknownPaymentMethod(String),

    /// A total does not fit in a `Decimal`.
    #[error("Ledger totals are too large")]
    Overflow,

    /// The store failed; no partial totals are produced.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Store(store) => store.into(),
            other @ (LedgerError::UnknownPaymentMethod(_) | LedgerError::Overflow) => {
                Self::InvalidInput(other.to_string())
            }
        }
    }
}

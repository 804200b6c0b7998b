//! Entry error types.

use compta_shared::AppError;
use thiserror::Error;

use crate::contact::ContactError;
use crate::ledger::LedgerError;
use crate::store::StoreError;
use crate::vat::VatError;

/// Errors raised while validating or recording an entry.
#[derive(Debug, Error)]
pub enum EntryError {
    /// Required form fields are blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Date is not in `DD/MM/YYYY` form or is not a calendar date.
    #[error("Invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),

    /// Amount or rate text rejected by the VAT calculator.
    #[error(transparent)]
    Vat(#[from] VatError),

    /// Payment method text is unknown.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Counterpart resolution failed.
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::Vat(vat) => vat.into(),
            EntryError::Ledger(ledger) => ledger.into(),
            EntryError::Contact(contact) => contact.into(),
            EntryError::Store(store) => store.into(),
            other @ (EntryError::MissingFields(_) | EntryError::InvalidDate(_)) => {
                Self::InvalidInput(other.to_string())
            }
        }
    }
}

//! VAT error types.

use compta_shared::AppError;
use compta_shared::types::MoneyParseError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during VAT calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VatError {
    /// Amount text is not a non-negative decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] MoneyParseError),

    /// Rate text does not carry a `%` marker or its number does not parse.
    #[error("Invalid VAT rate: '{0}'")]
    InvalidRate(String),

    /// Rate is negative or above 100%.
    #[error("VAT rate {0}% is out of range")]
    RateOutOfRange(Decimal),

    /// Rate has more than two decimals.
    #[error("VAT rate {0}% has more than two decimals")]
    RateTooPrecise(Decimal),

    /// Reconstructing a gross amount needs a non-zero rate.
    #[error("Cannot derive a gross amount from a zero VAT rate")]
    ZeroRate,

    /// Intermediate result does not fit in a decimal.
    #[error("Amount is too large")]
    Overflow,
}

impl From<VatError> for AppError {
    fn from(err: VatError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

//! Conversions between domain values and integer columns.

use compta_core::vat::VatRate;
use compta_shared::types::Money;
use rust_decimal::Decimal;

use crate::error::DbError;

/// Amount to whole cents, rounded half away from zero.
pub(crate) fn to_cents(amount: Decimal, entity: &'static str, id: impl ToString) -> Result<i64, DbError> {
    Money::new(amount)
        .to_cents()
        .ok_or_else(|| DbError::corrupt(entity, id, format!("amount {amount} does not fit in cents")))
}

/// Cents column to an amount. A missing value counts as zero.
pub(crate) fn from_cents(cents: Option<i64>) -> Decimal {
    Money::from_cents(cents.unwrap_or_default()).amount()
}

/// Hundredths-of-a-percent column to a rate.
pub(crate) fn to_rate(hundredths: i64, entity: &'static str, id: impl ToString) -> Result<VatRate, DbError> {
    VatRate::from_hundredths(hundredths).map_err(|err| DbError::corrupt(entity, id, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_amount_is_zero() {
        assert_eq!(from_cents(None), Decimal::ZERO);
        assert_eq!(from_cents(Some(1667)), dec!(16.67));
    }

    #[test]
    fn test_cents_are_rounded() {
        assert_eq!(to_cents(dec!(100.005), "expense", 1).unwrap(), 10001);
        assert_eq!(to_cents(dec!(45.5), "expense", 1).unwrap(), 4550);
    }

    #[test]
    fn test_huge_amount_is_corrupt() {
        assert!(matches!(
            to_cents(dec!(1000000000000000000000000000), "expense", 1),
            Err(DbError::CorruptRow { .. })
        ));
        assert!(matches!(to_cents(Decimal::MAX, "receipt", 2), Err(DbError::CorruptRow { .. })));
    }

    #[test]
    fn test_out_of_range_rate_is_corrupt() {
        assert_eq!(to_rate(550, "expense", 1).unwrap(), VatRate::REDUCED);
        assert!(matches!(to_rate(-1, "expense", 1), Err(DbError::CorruptRow { .. })));
        assert!(matches!(to_rate(10_001, "expense", 1), Err(DbError::CorruptRow { .. })));
    }
}

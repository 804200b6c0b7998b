//! Conversions between VAT-inclusive amounts and VAT amounts.
//!
//! All results are rounded to cents with midpoint-away-from-zero rounding.

use compta_shared::types::{Money, round_cents};
use rust_decimal::Decimal;

use super::error::VatError;
use super::rate::VatRate;

/// Sentinel shown by the calculator utility when a computation fails.
pub const GROSS_DISPLAY_SENTINEL: &str = "0";

/// VAT calculator.
///
/// Stateless; every operation is an associated function.
pub struct VatCalculator;

impl VatCalculator {
    /// VAT portion of a VAT-inclusive amount: `gross * rate / (100 + rate)`.
    ///
    /// A 0% rate yields `0.00`.
    ///
    /// # Example
    ///
    /// ```
    /// use compta_core::vat::{VatCalculator, VatRate};
    /// use rust_decimal_macros::dec;
    ///
    /// let vat = VatCalculator::vat_from_gross(dec!(100), VatRate::STANDARD);
    /// assert_eq!(vat, dec!(16.67));
    /// ```
    #[must_use]
    pub fn vat_from_gross(gross: Decimal, rate: VatRate) -> Decimal {
        if rate.is_zero() {
            return Decimal::new(0, 2);
        }
        // The ratio is below one for rates in 0..=100, so the product never outgrows `gross`.
        let ratio = rate.percent() / (Decimal::ONE_HUNDRED + rate.percent());
        round_cents(gross * ratio)
    }

    /// Text boundary of [`Self::vat_from_gross`].
    ///
    /// `amount_text` must be a non-negative decimal; `rate_text` must be in `X.XX%` form.
    pub fn compute_vat_from_gross(amount_text: &str, rate_text: &str) -> Result<Decimal, VatError> {
        let gross = Money::parse(amount_text)?;
        let rate = VatRate::parse(rate_text)?;
        Ok(Self::vat_from_gross(gross.amount(), rate))
    }

    /// Rebuilds the VAT-inclusive amount from the VAT paid: `vat / (rate / 100) + vat`.
    ///
    /// # Errors
    ///
    /// [`VatError::ZeroRate`] for a 0% rate, [`VatError::Overflow`] when the result
    /// does not fit in a decimal.
    pub fn gross_from_vat(vat_paid: Decimal, rate: VatRate) -> Result<Decimal, VatError> {
        if rate.is_zero() {
            return Err(VatError::ZeroRate);
        }
        let fraction = rate.percent() / Decimal::ONE_HUNDRED;
        let net = vat_paid.checked_div(fraction).ok_or(VatError::Overflow)?;
        let gross = net.checked_add(vat_paid).ok_or(VatError::Overflow)?;
        Ok(round_cents(gross))
    }

    /// Text boundary of [`Self::gross_from_vat`].
    pub fn compute_gross_from_vat(vat_text: &str, rate_text: &str) -> Result<Decimal, VatError> {
        let vat = Money::parse(vat_text)?;
        let rate = VatRate::parse(rate_text)?;
        Self::gross_from_vat(vat.amount(), rate)
    }

    /// Display value for the calculator utility.
    ///
    /// Any failure collapses to [`GROSS_DISPLAY_SENTINEL`].
    #[must_use]
    pub fn gross_display(vat_text: &str, rate_text: &str) -> String {
        match Self::compute_gross_from_vat(vat_text, rate_text) {
            Ok(gross) => Money::new(gross).plain(),
            Err(err) => {
                tracing::debug!(error = %err, vat = vat_text, rate = rate_text, "gross computation failed");
                GROSS_DISPLAY_SENTINEL.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compta_shared::types::MoneyParseError;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_vat_from_gross_standard_rate() {
        assert_eq!(
            VatCalculator::compute_vat_from_gross("100.00", "20.00%").unwrap(),
            dec!(16.67)
        );
    }

    #[rstest]
    #[case(dec!(50), VatRate::STANDARD, dec!(8.33))]
    #[case(dec!(110), VatRate::INTERMEDIATE, dec!(10.00))]
    #[case(dec!(105.50), VatRate::REDUCED, dec!(5.50))]
    #[case(dec!(0), VatRate::STANDARD, dec!(0.00))]
    #[case(dec!(123.45), VatRate::ZERO, dec!(0.00))]
    fn test_vat_from_gross_cases(#[case] gross: Decimal, #[case] rate: VatRate, #[case] expected: Decimal) {
        assert_eq!(VatCalculator::vat_from_gross(gross, rate), expected);
    }

    #[test]
    fn test_vat_from_gross_rounds_midpoint_away_from_zero() {
        // 0.625 * 25 / 125 = 0.125
        let rate = VatRate::new(dec!(25)).unwrap();
        assert_eq!(VatCalculator::vat_from_gross(dec!(0.625), rate), dec!(0.13));
    }

    #[test]
    fn test_gross_from_vat_standard_rate() {
        assert_eq!(
            VatCalculator::compute_gross_from_vat("16.67", "20.00%").unwrap(),
            dec!(100.02)
        );
    }

    #[test]
    fn test_gross_from_vat_zero_rate_is_reported() {
        assert_eq!(
            VatCalculator::gross_from_vat(dec!(10), VatRate::ZERO),
            Err(VatError::ZeroRate)
        );
    }

    #[rstest]
    #[case("abc", "20.00%")]
    #[case("-5", "20.00%")]
    #[case("100", "20.00")]
    #[case("100", "vingt%")]
    fn test_compute_vat_rejects_bad_text(#[case] amount: &str, #[case] rate: &str) {
        assert!(VatCalculator::compute_vat_from_gross(amount, rate).is_err());
    }

    #[test]
    fn test_compute_vat_reports_empty_amount() {
        assert_eq!(
            VatCalculator::compute_vat_from_gross("", "20.00%"),
            Err(VatError::InvalidAmount(MoneyParseError::Empty))
        );
    }

    #[rstest]
    #[case("16.67", "20.00%", "100.02")]
    #[case("10", "10.00%", "110.00")]
    #[case("10", "0.00%", "0")]
    #[case("dix", "20.00%", "0")]
    #[case("10", "", "0")]
    fn test_gross_display(#[case] vat: &str, #[case] rate: &str, #[case] expected: &str) {
        assert_eq!(VatCalculator::gross_display(vat, rate), expected);
    }
}

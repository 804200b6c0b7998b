//! Property-based tests for VAT calculations.
//!
//! - Monotonicity of `vat_from_gross` in the gross amount
//! - Gross reconstruction from the VAT portion stays within rounding tolerance

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::VatCalculator;
use super::rate::VatRate;

/// Gross amounts from 0.00 to 1,000,000.00.
fn gross_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any rate in 0.00%..=100.00%.
fn any_rate() -> impl Strategy<Value = VatRate> {
    (0i64..=10_000i64).prop_map(|hundredths| VatRate::from_hundredths(hundredths).unwrap())
}

/// Strictly positive rates, biased towards the standard ones.
fn positive_rate() -> impl Strategy<Value = VatRate> {
    prop_oneof![
        Just(VatRate::REDUCED),
        Just(VatRate::INTERMEDIATE),
        Just(VatRate::STANDARD),
        (1i64..=10_000i64).prop_map(|hundredths| VatRate::from_hundredths(hundredths).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A larger gross never yields a smaller VAT portion.
    #[test]
    fn prop_vat_is_monotonic_in_gross(
        a in gross_amount(),
        b in gross_amount(),
        rate in any_rate(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            VatCalculator::vat_from_gross(low, rate) <= VatCalculator::vat_from_gross(high, rate)
        );
    }

    /// VAT portion is rounded to cents and never exceeds the gross.
    #[test]
    fn prop_vat_is_a_rounded_share_of_gross(gross in gross_amount(), rate in any_rate()) {
        let vat = VatCalculator::vat_from_gross(gross, rate);
        prop_assert!(vat >= Decimal::ZERO);
        prop_assert!(vat <= gross);
        prop_assert_eq!(vat.round_dp(2), vat);
    }

    /// Rebuilding the gross from its rounded VAT lands within the rounding error.
    ///
    /// The VAT is off by at most half a cent, which the reconstruction scales by
    /// `(100 + r) / r`; the final rounding adds another half cent.
    #[test]
    fn prop_gross_round_trip_within_tolerance(gross in gross_amount(), rate in positive_rate()) {
        let vat = VatCalculator::vat_from_gross(gross, rate);
        let rebuilt = VatCalculator::gross_from_vat(vat, rate).unwrap();

        let r = rate.percent();
        let tolerance = dec!(0.005) * (Decimal::ONE_HUNDRED + r) / r + dec!(0.005);
        prop_assert!(
            (rebuilt - gross).abs() <= tolerance,
            "gross {} rate {} rebuilt {} tolerance {}", gross, rate, rebuilt, tolerance
        );
    }
}

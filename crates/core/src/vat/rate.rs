//! VAT rates.

use std::fmt;
use std::str::FromStr;

use compta_shared::config::VatConfig;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::VatError;

/// A VAT rate expressed as a percentage (`20.00` means 20%).
///
/// Valid rates lie in `0..=100` with at most two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VatRate(Decimal);

impl VatRate {
    /// 0.00%, for exempt operations.
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, 2));
    /// 5.50%, reduced rate.
    pub const REDUCED: Self = Self(Decimal::from_parts(550, 0, 0, false, 2));
    /// 10.00%, intermediate rate.
    pub const INTERMEDIATE: Self = Self(Decimal::from_parts(1000, 0, 0, false, 2));
    /// 20.00%, standard rate.
    pub const STANDARD: Self = Self(Decimal::from_parts(2000, 0, 0, false, 2));

    /// Rates offered when nothing is configured, in display order.
    pub const DEFAULTS: [Self; 4] = [Self::REDUCED, Self::INTERMEDIATE, Self::STANDARD, Self::ZERO];

    /// Creates a rate from a percentage.
    ///
    /// Trailing zeros are accepted (`20.000`), extra precision is not.
    pub fn new(percent: Decimal) -> Result<Self, VatError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(VatError::RateOutOfRange(percent));
        }
        if percent.normalize().scale() > 2 {
            return Err(VatError::RateTooPrecise(percent));
        }
        Ok(Self(percent))
    }

    /// Parses the `X.XX%` form offered by rate pickers.
    ///
    /// The `%` marker is mandatory; surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, VatError> {
        let trimmed = text.trim();
        let number = trimmed
            .strip_suffix('%')
            .ok_or_else(|| VatError::InvalidRate(text.to_string()))?;
        let percent = Decimal::from_str(number.trim())
            .map_err(|_| VatError::InvalidRate(text.to_string()))?;
        Self::new(percent)
    }

    /// Rebuilds a rate stored as hundredths of a percent (`2000` is 20.00%).
    pub fn from_hundredths(hundredths: i64) -> Result<Self, VatError> {
        Self::new(Decimal::new(hundredths, 2))
    }

    /// The rate in hundredths of a percent, for integer storage.
    #[must_use]
    pub fn to_hundredths(self) -> i64 {
        (self.0.round_dp(2) * Decimal::ONE_HUNDRED)
            .to_i64()
            .unwrap_or_default()
    }

    /// The percentage value.
    #[must_use]
    pub const fn percent(self) -> Decimal {
        self.0
    }

    /// Returns true for the 0% rate.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// The percentage without the `%` sign (`20.00`), as shown in ledger tables.
    #[must_use]
    pub fn plain(self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.plain())
    }
}

impl FromStr for VatRate {
    type Err = VatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses the rates offered to the user from configuration.
///
/// An empty list falls back to [`VatRate::DEFAULTS`].
pub fn rates_from_config(config: &VatConfig) -> Result<Vec<VatRate>, VatError> {
    if config.rates.is_empty() {
        return Ok(VatRate::DEFAULTS.to_vec());
    }
    config.rates.iter().map(|text| VatRate::parse(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("5.50%", dec!(5.50))]
    #[case("10.00%", dec!(10.00))]
    #[case("20.00%", dec!(20.00))]
    #[case("0.00%", dec!(0.00))]
    #[case(" 20% ", dec!(20))]
    fn test_parse_percent_text(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(VatRate::parse(text).unwrap().percent(), expected);
    }

    #[rstest]
    #[case("20.00")]
    #[case("%")]
    #[case("abc%")]
    #[case("")]
    fn test_parse_rejects_missing_marker_or_number(#[case] text: &str) {
        assert!(matches!(VatRate::parse(text), Err(VatError::InvalidRate(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            VatRate::parse("-5%"),
            Err(VatError::RateOutOfRange(dec!(-5)))
        );
        assert_eq!(
            VatRate::parse("150%"),
            Err(VatError::RateOutOfRange(dec!(150)))
        );
    }

    #[rstest]
    #[case("20.005%")]
    #[case("5.501%")]
    #[case("0.001%")]
    fn test_parse_rejects_sub_hundredth_rates(#[case] text: &str) {
        assert!(matches!(VatRate::parse(text), Err(VatError::RateTooPrecise(_))));
    }

    #[test]
    fn test_parse_accepts_trailing_zeros() {
        let rate = VatRate::parse("20.000%").unwrap();
        assert_eq!(rate, VatRate::STANDARD);
        assert_eq!(rate.to_string(), "20.00%");
        assert_eq!(rate.to_hundredths(), 2000);
    }

    #[test]
    fn test_display_matches_picker_text() {
        assert_eq!(VatRate::REDUCED.to_string(), "5.50%");
        assert_eq!(VatRate::STANDARD.to_string(), "20.00%");
        assert_eq!(VatRate::new(dec!(5.5)).unwrap().to_string(), "5.50%");
        assert_eq!(VatRate::ZERO.plain(), "0.00");
    }

    #[test]
    fn test_hundredths_storage() {
        assert_eq!(VatRate::REDUCED.to_hundredths(), 550);
        assert_eq!(VatRate::from_hundredths(2000).unwrap(), VatRate::STANDARD);
    }

    #[test]
    fn test_rates_from_config() {
        let rates = rates_from_config(&VatConfig::default()).unwrap();
        assert_eq!(rates, VatRate::DEFAULTS.to_vec());

        let empty = VatConfig { rates: vec![] };
        assert_eq!(rates_from_config(&empty).unwrap().len(), 4);

        let broken = VatConfig {
            rates: vec!["20.00%".into(), "twenty".into()],
        };
        assert!(rates_from_config(&broken).is_err());
    }
}

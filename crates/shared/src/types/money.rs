//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places amounts are rounded and displayed to.
pub const CENT_PLACES: u32 = 2;

/// Errors raised while parsing user-entered amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// Text is empty or blank.
    #[error("amount is empty")]
    Empty,

    /// Text is not a plain non-negative decimal.
    #[error("'{0}' is not a valid amount")]
    Malformed(String),

    /// Amount is above [`Money::MAX`].
    #[error("'{0}' is above the largest accepted amount")]
    TooLarge(String),
}

/// A euro amount.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Zero euros.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest amount accepted from user input: 999 999 999 999,99 €.
    ///
    /// Its cents fit in an `i64`, and sums of such amounts stay far from the
    /// `Decimal` limit.
    pub const MAX: Self = Self(Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, CENT_PLACES));

    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Builds an amount from an integer number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CENT_PLACES))
    }

    /// Returns the amount in whole cents, rounded half away from zero.
    ///
    /// `None` if the amount does not fit in an `i64`.
    #[must_use]
    pub fn to_cents(self) -> Option<i64> {
        self.rounded().0.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
    }

    /// Returns the inner decimal.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Rounds to cents, midpoint away from zero.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(round_cents(self.0))
    }

    /// Parses a plain non-negative decimal as typed in an amount field.
    ///
    /// Accepted: ASCII digits with at most one `.` (`"12"`, `"12.5"`, `".5"`,
    /// `"12."`). Signs, exponents, thousands separators and commas are rejected,
    /// as are amounts above [`Money::MAX`].
    pub fn parse(text: &str) -> Result<Self, MoneyParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let digits = text.replacen('.', "", 1);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyParseError::Malformed(text.to_string()));
        }

        let normalized = match (text.starts_with('.'), text.ends_with('.')) {
            (true, _) => format!("0{text}"),
            (false, true) => text.trim_end_matches('.').to_string(),
            (false, false) => text.to_string(),
        };

        let amount = Decimal::from_str(&normalized).map_err(|_| MoneyParseError::Malformed(text.to_string()))?;
        if amount > Self::MAX.0 {
            return Err(MoneyParseError::TooLarge(text.to_string()));
        }
        Ok(Self(amount))
    }

    /// Two-decimal display without currency, as used in entry forms (`1234.50`).
    #[must_use]
    pub fn plain(self) -> String {
        format!("{:.2}", round_cents(self.0))
    }

    /// Two-decimal display with the euro sign (`1234.50 €`).
    #[must_use]
    pub fn euro(self) -> String {
        format!("{} €", self.plain())
    }

    /// French grouped display (`1 234,50 €`).
    #[must_use]
    pub fn euro_grouped(self) -> String {
        let plain = self.plain();
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }

        format!("{sign}{grouped},{frac_part} €")
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

/// Rounds a decimal to cents with standard (half away from zero) rounding.
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

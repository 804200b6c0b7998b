//! VAT (TVA) calculations.
//!
//! Rates are percentages; amounts are VAT-inclusive (TTC) unless stated otherwise.

pub mod calculator;
pub mod error;
pub mod rate;

#[cfg(test)]
mod props;

pub use calculator::{GROSS_DISPLAY_SENTINEL, VatCalculator};
pub use error::VatError;
pub use rate::{VatRate, rates_from_config};

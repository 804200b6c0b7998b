//! Expense and receipt ledger.
//!
//! This module implements:
//! - The expense and receipt records and their shared `Transaction` trait
//! - Period aggregation with gross and VAT totals
//! - The unsettled-expense view
//! - Pre-formatted table rows

pub mod aggregator;
pub mod error;
pub mod rows;
pub mod types;


pub use aggregator::{LedgerAggregate, LedgerAggregator, UnsettledAggregate};
pub use error::LedgerError;
pub use rows::{DISPLAY_DATE_FORMAT, ExpenseRow, ReceiptRow, yes_no};
pub use types::{Expense, PaymentMethod, Receipt, Transaction};

//! Core bookkeeping logic for Compta.
//!
//! This crate contains pure business logic with ZERO database or UI dependencies.
//! All domain types, validation rules, and calculations live here; persistence
//! is reached through the [`store::LedgerStore`] trait.
//!
//! # Modules
//!
//! - `vat` - VAT calculations between gross (TTC) and VAT amounts
//! - `period` - Month names and the active reporting period
//! - `ledger` - Expense and receipt records and period aggregation
//! - `contact` - Supplier and client directory
//! - `entry` - Form validation and recording of expenses and receipts
//! - `reports` - Monthly summary, unsettled report, period tax document
//! - `store` - Persistence collaborator trait and in-memory implementation

pub mod contact;
pub mod entry;
pub mod ledger;
pub mod period;
pub mod reports;
pub mod store;
pub mod vat;

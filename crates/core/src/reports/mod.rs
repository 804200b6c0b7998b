//! Reconciliation reports.
//!
//! This module provides pure report building on top of ledger aggregates:
//! - Monthly summary (balance and VAT due)
//! - Unsettled-expense report
//! - Period tax document and unsettled document for renderers
//! - The renderer seam and a JSON renderer

pub mod error;
pub mod renderer;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use renderer::{DocumentRenderer, JsonRenderer};
pub use service::{PERIOD_DOCUMENT_TITLE, ReportService, UNSETTLED_DOCUMENT_TITLE, UNSETTLED_FILE_NAME};
pub use types::*;

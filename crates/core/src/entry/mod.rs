//! Entry forms and the operations that record them.

pub mod error;
pub mod form;
pub mod service;

pub use error::EntryError;
pub use form::{ExpenseForm, ReceiptForm, parse_display_date, vat_preview};
pub use service::EntryService;

//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

mod columns;
pub mod contact;
pub mod expense;
pub mod period;
pub mod receipt;

pub use contact::ContactRepository;
pub use expense::ExpenseRepository;
pub use period::PeriodRepository;
pub use receipt::ReceiptRepository;

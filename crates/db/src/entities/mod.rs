//! `SeaORM` entity definitions.

pub mod contacts;
pub mod expenses;
pub mod period;
pub mod receipts;

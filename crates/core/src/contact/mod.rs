//! Supplier and client directory.

pub mod error;
pub mod service;
pub mod types;

pub use error::ContactError;
pub use service::ContactService;
pub use types::{Contact, ContactDraft, CounterpartResolution};

//! Contact error types.

use compta_shared::AppError;
use compta_shared::types::ContactId;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur in the contact directory.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Name is empty after trimming.
    #[error("Contact name is required")]
    EmptyName,

    /// Another contact already has this name.
    #[error("A contact named '{0}' already exists")]
    DuplicateName(String),

    /// No contact with this id.
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::EmptyName => Self::InvalidInput(err.to_string()),
            ContactError::DuplicateName(_) => Self::Conflict(err.to_string()),
            ContactError::NotFound(_) => Self::NotFound(err.to_string()),
            ContactError::Store(store) => store.into(),
        }
    }
}

//! Contact directory operations.

use compta_shared::types::ContactId;

use super::error::ContactError;
use super::types::{Contact, ContactDraft, CounterpartResolution};
use crate::store::{LedgerStore, StoreError};

/// Contact directory service.
pub struct ContactService;

impl ContactService {
    /// All contacts sorted by name, as offered by counterpart pickers.
    pub fn list_contacts<S>(store: &S) -> Result<Vec<Contact>, ContactError>
    where
        S: LedgerStore + ?Sized,
    {
        let mut contacts = store.list_contacts()?;
        contacts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(contacts)
    }

    /// Contact with exactly this name (after trimming).
    pub fn find_by_name<S>(store: &S, name: &str) -> Result<Option<Contact>, ContactError>
    where
        S: LedgerStore + ?Sized,
    {
        Ok(store.find_contact_by_name(name.trim())?)
    }

    /// Adds a contact from form fields.
    pub fn add_contact<S>(store: &mut S, draft: &ContactDraft) -> Result<Contact, ContactError>
    where
        S: LedgerStore + ?Sized,
    {
        let name = Self::require_name(draft)?;
        if store.contact_exists(name)? {
            return Err(ContactError::DuplicateName(name.to_string()));
        }

        let contact = draft.to_contact(ContactId::new());
        store
            .insert_contact(&contact)
            .map_err(|err| Self::map_write_error(err, &contact))?;
        tracing::info!(contact_id = %contact.id, name = %contact.name, "contact added");
        Ok(contact)
    }

    /// Replaces every field of an existing contact.
    pub fn update_contact<S>(store: &mut S, id: ContactId, draft: &ContactDraft) -> Result<Contact, ContactError>
    where
        S: LedgerStore + ?Sized,
    {
        Self::require_name(draft)?;
        let contact = draft.to_contact(id);
        store
            .update_contact(&contact)
            .map_err(|err| Self::map_write_error(err, &contact))?;
        tracing::info!(contact_id = %id, name = %contact.name, "contact updated");
        Ok(contact)
    }

    /// Removes a contact.
    pub fn delete_contact<S>(store: &mut S, id: ContactId) -> Result<(), ContactError>
    where
        S: LedgerStore + ?Sized,
    {
        store.delete_contact(id).map_err(|err| match err {
            StoreError::NotFound { .. } => ContactError::NotFound(id),
            other => other.into(),
        })?;
        tracing::info!(contact_id = %id, "contact deleted");
        Ok(())
    }

    /// Finds the contact for a transaction counterpart, creating it on demand.
    ///
    /// When `name` is unknown, `confirm` is asked whether to create it. A refusal
    /// is not an error: the transaction is still recorded, without a contact id.
    pub fn resolve_counterpart<S, F>(store: &mut S, name: &str, confirm: F) -> Result<CounterpartResolution, ContactError>
    where
        S: LedgerStore + ?Sized,
        F: FnOnce(&str) -> bool,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }

        if let Some(contact) = store.find_contact_by_name(name)? {
            return Ok(CounterpartResolution::Existing(contact));
        }

        if !confirm(name) {
            tracing::info!(name, "contact creation declined");
            return Ok(CounterpartResolution::Declined);
        }

        let contact = Contact::named(name);
        store
            .insert_contact(&contact)
            .map_err(|err| Self::map_write_error(err, &contact))?;
        tracing::info!(contact_id = %contact.id, name, "contact created on demand");
        Ok(CounterpartResolution::Created(contact))
    }

    fn require_name(draft: &ContactDraft) -> Result<&str, ContactError> {
        let name = draft.trimmed_name();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(name)
    }

    fn map_write_error(err: StoreError, contact: &Contact) -> ContactError {
        match err {
            StoreError::Conflict(_) => ContactError::DuplicateName(contact.name.clone()),
            StoreError::NotFound { .. } => ContactError::NotFound(contact.id),
            other @ StoreError::Unavailable(_) => other.into(),
        }
    }
}

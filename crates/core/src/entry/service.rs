//! Recording, editing and settling entries.

use compta_shared::types::{ContactId, ExpenseId, ReceiptId};

use super::error::EntryError;
use super::form::{ExpenseForm, ReceiptForm};
use crate::contact::{ContactService, CounterpartResolution};
use crate::ledger::{Expense, Receipt};
use crate::store::LedgerStore;

/// Entry service.
///
/// Every operation validates the form before touching the store, so a
/// rejected form has no side effects.
pub struct EntryService;

impl EntryService {
    /// Records a new expense.
    ///
    /// An unknown supplier triggers `confirm`; if it declines, the expense is
    /// still recorded without a contact id. A contact created here is removed
    /// again when the expense cannot be stored.
    pub fn record_expense<S, F>(store: &mut S, form: &ExpenseForm, confirm: F) -> Result<Expense, EntryError>
    where
        S: LedgerStore + ?Sized,
        F: FnOnce(&str) -> bool,
    {
        let mut expense = form.to_expense(ExpenseId::new())?;
        let resolution = ContactService::resolve_counterpart(store, &expense.supplier, confirm)?;
        expense.contact_id = resolution.contact_id();
        if let Err(err) = store.insert_expense(&expense) {
            Self::discard_created(store, &resolution);
            return Err(err.into());
        }
        tracing::info!(expense_id = %expense.id, supplier = %expense.supplier, gross = %expense.gross, "expense recorded");
        Ok(expense)
    }

    /// Replaces an existing expense with the form contents.
    pub fn update_expense<S>(store: &mut S, id: ExpenseId, form: &ExpenseForm) -> Result<Expense, EntryError>
    where
        S: LedgerStore + ?Sized,
    {
        let mut expense = form.to_expense(id)?;
        expense.contact_id = Self::known_contact(&*store, &expense.supplier)?;
        store.update_expense(&expense)?;
        tracing::info!(expense_id = %id, "expense updated");
        Ok(expense)
    }

    /// Deletes an expense.
    pub fn delete_expense<S>(store: &mut S, id: ExpenseId) -> Result<(), EntryError>
    where
        S: LedgerStore + ?Sized,
    {
        store.delete_expense(id)?;
        tracing::info!(expense_id = %id, "expense deleted");
        Ok(())
    }

    /// Marks the given expenses as settled. Returns how many were updated.
    ///
    /// Stops at the first failure; expenses before it stay settled.
    pub fn settle_expenses<S>(store: &mut S, ids: &[ExpenseId]) -> Result<usize, EntryError>
    where
        S: LedgerStore + ?Sized,
    {
        for id in ids {
            store.set_expense_settled(*id, true)?;
        }
        tracing::info!(count = ids.len(), "expenses settled");
        Ok(ids.len())
    }

    /// Records a new receipt, resolving the client like [`Self::record_expense`].
    pub fn record_receipt<S, F>(store: &mut S, form: &ReceiptForm, confirm: F) -> Result<Receipt, EntryError>
    where
        S: LedgerStore + ?Sized,
        F: FnOnce(&str) -> bool,
    {
        let mut receipt = form.to_receipt(ReceiptId::new())?;
        let resolution = ContactService::resolve_counterpart(store, &receipt.client, confirm)?;
        receipt.contact_id = resolution.contact_id();
        if let Err(err) = store.insert_receipt(&receipt) {
            Self::discard_created(store, &resolution);
            return Err(err.into());
        }
        tracing::info!(receipt_id = %receipt.id, client = %receipt.client, gross = %receipt.gross, "receipt recorded");
        Ok(receipt)
    }

    /// Replaces an existing receipt with the form contents.
    pub fn update_receipt<S>(store: &mut S, id: ReceiptId, form: &ReceiptForm) -> Result<Receipt, EntryError>
    where
        S: LedgerStore + ?Sized,
    {
        let mut receipt = form.to_receipt(id)?;
        receipt.contact_id = Self::known_contact(&*store, &receipt.client)?;
        store.update_receipt(&receipt)?;
        tracing::info!(receipt_id = %id, "receipt updated");
        Ok(receipt)
    }

    /// Deletes a receipt.
    pub fn delete_receipt<S>(store: &mut S, id: ReceiptId) -> Result<(), EntryError>
    where
        S: LedgerStore + ?Sized,
    {
        store.delete_receipt(id)?;
        tracing::info!(receipt_id = %id, "receipt deleted");
        Ok(())
    }

    fn discard_created<S>(store: &mut S, resolution: &CounterpartResolution)
    where
        S: LedgerStore + ?Sized,
    {
        if let CounterpartResolution::Created(contact) = resolution
            && let Err(err) = store.delete_contact(contact.id)
        {
            tracing::warn!(contact_id = %contact.id, error = %err, "could not remove contact after failed insert");
        }
    }

    fn known_contact<S>(store: &S, name: &str) -> Result<Option<ContactId>, EntryError>
    where
        S: LedgerStore + ?Sized,
    {
        Ok(ContactService::find_by_name(store, name)?.map(|contact| contact.id))
    }
}

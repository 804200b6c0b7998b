//! In-memory store.

use compta_shared::types::{ContactId, ExpenseId, ReceiptId};

use super::error::{StoreError, StoreResult};
use super::LedgerStore;
use crate::contact::Contact;
use crate::ledger::{Expense, Receipt};
use crate::period::{Period, StoredPeriod};

/// A [`LedgerStore`] backed by vectors, preserving insertion order.
///
/// Failures can be injected with [`MemoryStore::fail_reads`],
/// [`MemoryStore::fail_writes`] and [`MemoryStore::fail_record_writes`] to
/// exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    expenses: Vec<Expense>,
    receipts: Vec<Receipt>,
    contacts: Vec<Contact>,
    period: Option<StoredPeriod>,
    fail_reads: bool,
    fail_writes: bool,
    fail_record_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every read fail with [`StoreError::Unavailable`] while `fail` is set.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Makes every write fail with [`StoreError::Unavailable`] while `fail` is set.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Makes expense and receipt writes fail while contact and period writes
    /// still succeed.
    pub fn fail_record_writes(&mut self, fail: bool) {
        self.fail_record_writes = fail;
    }

    /// Number of stored expenses.
    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Number of stored receipts.
    #[must_use]
    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }

    fn check_read(&self) -> StoreResult<()> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("memory store: reads disabled".into()));
        }
        Ok(())
    }

    fn check_write(&self) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("memory store: writes disabled".into()));
        }
        Ok(())
    }

    fn check_record_write(&self) -> StoreResult<()> {
        self.check_write()?;
        if self.fail_record_writes {
            return Err(StoreError::Unavailable("memory store: record writes disabled".into()));
        }
        Ok(())
    }

    fn expense_mut(&mut self, id: ExpenseId) -> StoreResult<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("expense", id))
    }

    fn receipt_mut(&mut self, id: ReceiptId) -> StoreResult<&mut Receipt> {
        self.receipts
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found("receipt", id))
    }

    fn name_taken(&self, name: &str, except: Option<ContactId>) -> bool {
        self.contacts
            .iter()
            .any(|c| c.name == name && Some(c.id) != except)
    }
}

impl LedgerStore for MemoryStore {
    fn expenses_in_period(&self, period: &Period) -> StoreResult<Vec<Expense>> {
        self.check_read()?;
        Ok(self
            .expenses
            .iter()
            .filter(|e| period.contains(e.date))
            .cloned()
            .collect())
    }

    fn unsettled_expenses(&self) -> StoreResult<Vec<Expense>> {
        self.check_read()?;
        Ok(self.expenses.iter().filter(|e| !e.settled).cloned().collect())
    }

    fn insert_expense(&mut self, expense: &Expense) -> StoreResult<()> {
        self.check_record_write()?;
        if self.expenses.iter().any(|e| e.id == expense.id) {
            return Err(StoreError::Conflict(format!("expense {} already exists", expense.id)));
        }
        self.expenses.push(expense.clone());
        Ok(())
    }

    fn update_expense(&mut self, expense: &Expense) -> StoreResult<()> {
        self.check_record_write()?;
        *self.expense_mut(expense.id)? = expense.clone();
        Ok(())
    }

    fn delete_expense(&mut self, id: ExpenseId) -> StoreResult<()> {
        self.check_record_write()?;
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Err(StoreError::not_found("expense", id));
        }
        Ok(())
    }

    fn set_expense_settled(&mut self, id: ExpenseId, settled: bool) -> StoreResult<()> {
        self.check_record_write()?;
        self.expense_mut(id)?.settled = settled;
        Ok(())
    }

    fn receipts_in_period(&self, period: &Period) -> StoreResult<Vec<Receipt>> {
        self.check_read()?;
        Ok(self
            .receipts
            .iter()
            .filter(|r| period.contains(r.date))
            .cloned()
            .collect())
    }

    fn insert_receipt(&mut self, receipt: &Receipt) -> StoreResult<()> {
        self.check_record_write()?;
        if self.receipts.iter().any(|r| r.id == receipt.id) {
            return Err(StoreError::Conflict(format!("receipt {} already exists", receipt.id)));
        }
        self.receipts.push(receipt.clone());
        Ok(())
    }

    fn update_receipt(&mut self, receipt: &Receipt) -> StoreResult<()> {
        self.check_record_write()?;
        *self.receipt_mut(receipt.id)? = receipt.clone();
        Ok(())
    }

    fn delete_receipt(&mut self, id: ReceiptId) -> StoreResult<()> {
        self.check_record_write()?;
        let before = self.receipts.len();
        self.receipts.retain(|r| r.id != id);
        if self.receipts.len() == before {
            return Err(StoreError::not_found("receipt", id));
        }
        Ok(())
    }

    fn load_period(&self) -> StoreResult<Option<StoredPeriod>> {
        self.check_read()?;
        Ok(self.period.clone())
    }

    fn save_period(&mut self, period: &StoredPeriod) -> StoreResult<()> {
        self.check_write()?;
        self.period = Some(period.clone());
        Ok(())
    }

    fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.check_read()?;
        Ok(self.contacts.clone())
    }

    fn find_contact_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.check_read()?;
        Ok(self.contacts.iter().find(|c| c.name == name).cloned())
    }

    fn insert_contact(&mut self, contact: &Contact) -> StoreResult<()> {
        self.check_write()?;
        if self.name_taken(&contact.name, None) {
            return Err(StoreError::Conflict(format!("contact '{}' already exists", contact.name)));
        }
        self.contacts.push(contact.clone());
        Ok(())
    }

    fn update_contact(&mut self, contact: &Contact) -> StoreResult<()> {
        self.check_write()?;
        if self.name_taken(&contact.name, Some(contact.id)) {
            return Err(StoreError::Conflict(format!("contact '{}' already exists", contact.name)));
        }
        let slot = self
            .contacts
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or_else(|| StoreError::not_found("contact", contact.id))?;
        *slot = contact.clone();
        Ok(())
    }

    fn delete_contact(&mut self, id: ContactId) -> StoreResult<()> {
        self.check_write()?;
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        if self.contacts.len() == before {
            return Err(StoreError::not_found("contact", id));
        }
        for expense in self.expenses.iter_mut().filter(|e| e.contact_id == Some(id)) {
            expense.contact_id = None;
        }
        for receipt in self.receipts.iter_mut().filter(|r| r.contact_id == Some(id)) {
            receipt.contact_id = None;
        }
        Ok(())
    }
}

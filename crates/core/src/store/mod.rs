//! Persistence boundary.
//!
//! [`LedgerStore`] is the only way the core reaches stored data. Reads take
//! `&self`; writes take `&mut self`, so one session owns a store at a time.

pub mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use compta_shared::types::{ContactId, ExpenseId, ReceiptId};

use crate::contact::Contact;
use crate::ledger::{Expense, Receipt};
use crate::period::{Period, StoredPeriod};

/// Blocking access to expenses, receipts, contacts and the active period.
///
/// Listing methods return records in insertion order.
pub trait LedgerStore {
    // ---------------------------------------------------------------------
    // Expenses
    // ---------------------------------------------------------------------

    /// Expenses dated inside `period`.
    fn expenses_in_period(&self, period: &Period) -> StoreResult<Vec<Expense>>;

    /// Expenses not yet settled, any date.
    fn unsettled_expenses(&self) -> StoreResult<Vec<Expense>>;

    /// Adds a new expense.
    fn insert_expense(&mut self, expense: &Expense) -> StoreResult<()>;

    /// Replaces the expense with the same id.
    fn update_expense(&mut self, expense: &Expense) -> StoreResult<()>;

    /// Removes an expense.
    fn delete_expense(&mut self, id: ExpenseId) -> StoreResult<()>;

    /// Sets the settled flag of one expense.
    fn set_expense_settled(&mut self, id: ExpenseId, settled: bool) -> StoreResult<()>;

    // ---------------------------------------------------------------------
    // Receipts
    // ---------------------------------------------------------------------

    /// Receipts dated inside `period`.
    fn receipts_in_period(&self, period: &Period) -> StoreResult<Vec<Receipt>>;

    /// Adds a new receipt.
    fn insert_receipt(&mut self, receipt: &Receipt) -> StoreResult<()>;

    /// Replaces the receipt with the same id.
    fn update_receipt(&mut self, receipt: &Receipt) -> StoreResult<()>;

    /// Removes a receipt.
    fn delete_receipt(&mut self, id: ReceiptId) -> StoreResult<()>;

    // ---------------------------------------------------------------------
    // Period singleton
    // ---------------------------------------------------------------------

    /// The persisted period, if one was ever saved.
    fn load_period(&self) -> StoreResult<Option<StoredPeriod>>;

    /// Inserts or replaces the persisted period.
    fn save_period(&mut self, period: &StoredPeriod) -> StoreResult<()>;

    // ---------------------------------------------------------------------
    // Contacts
    // ---------------------------------------------------------------------

    /// All contacts.
    fn list_contacts(&self) -> StoreResult<Vec<Contact>>;

    /// Contact with exactly this name.
    fn find_contact_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Whether a contact with exactly this name exists.
    fn contact_exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.find_contact_by_name(name)?.is_some())
    }

    /// Adds a contact. Fails with [`StoreError::Conflict`] when the name is taken.
    fn insert_contact(&mut self, contact: &Contact) -> StoreResult<()>;

    /// Replaces the contact with the same id.
    fn update_contact(&mut self, contact: &Contact) -> StoreResult<()>;

    /// Removes a contact. Transactions keep their counterpart name but lose the contact id.
    fn delete_contact(&mut self, id: ContactId) -> StoreResult<()>;
}

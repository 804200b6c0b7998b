//! [`LedgerStore`] backed by SQLite.

use compta_core::contact::Contact;
use compta_core::ledger::{Expense, Receipt};
use compta_core::period::{Period, StoredPeriod};
use compta_core::store::{LedgerStore, StoreError, StoreResult};
use compta_shared::config::DatabaseConfig;
use compta_shared::types::{ContactId, ExpenseId, ReceiptId};
use sea_orm::DatabaseConnection;
use tokio::runtime::{Builder, Runtime};

use crate::error::DbError;
use crate::repositories::{ContactRepository, ExpenseRepository, PeriodRepository, ReceiptRepository};

/// Blocking store over a SeaORM connection pool.
///
/// Owns a current-thread Tokio runtime that drives every query. Do not use it
/// from inside another async runtime; `block_on` panics there.
pub struct SqliteStore {
    db: DatabaseConnection,
    contacts: ContactRepository,
    expenses: ExpenseRepository,
    receipts: ReceiptRepository,
    period: PeriodRepository,
    // Dropped last, after the pool.
    runtime: Runtime,
}

impl SqliteStore {
    /// Connects, applies pending migrations and returns the store.
    pub fn open(config: &DatabaseConfig) -> Result<Self, DbError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let db = runtime.block_on(crate::connect_and_migrate(config))?;
        tracing::info!(url = %config.url, "sqlite store opened");
        Ok(Self::from_parts(runtime, db))
    }

    /// [`SqliteStore::open`] with default pool settings.
    pub fn open_url(url: &str) -> Result<Self, DbError> {
        Self::open(&DatabaseConfig {
            url: url.to_string(),
            ..DatabaseConfig::default()
        })
    }

    fn from_parts(runtime: Runtime, db: DatabaseConnection) -> Self {
        Self {
            contacts: ContactRepository::new(db.clone()),
            expenses: ExpenseRepository::new(db.clone()),
            receipts: ReceiptRepository::new(db.clone()),
            period: PeriodRepository::new(db.clone()),
            db,
            runtime,
        }
    }

    /// The underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    fn run<T>(&self, operation: &'static str, future: impl Future<Output = Result<T, DbError>>) -> StoreResult<T> {
        self.runtime.block_on(future).map_err(|err| {
            match &err {
                DbError::NotFound { .. } | DbError::Conflict(_) => {
                    tracing::debug!(operation, error = %err, "store operation rejected");
                }
                _ => tracing::error!(operation, error = %err, "store operation failed"),
            }
            StoreError::from(err)
        })
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

impl LedgerStore for SqliteStore {
    fn expenses_in_period(&self, period: &Period) -> StoreResult<Vec<Expense>> {
        self.run("expenses_in_period", self.expenses.find_in_period(period))
    }

    fn unsettled_expenses(&self) -> StoreResult<Vec<Expense>> {
        self.run("unsettled_expenses", self.expenses.find_unsettled())
    }

    fn insert_expense(&mut self, expense: &Expense) -> StoreResult<()> {
        self.run("insert_expense", self.expenses.insert(expense))
    }

    fn update_expense(&mut self, expense: &Expense) -> StoreResult<()> {
        self.run("update_expense", self.expenses.update(expense))
    }

    fn delete_expense(&mut self, id: ExpenseId) -> StoreResult<()> {
        self.run("delete_expense", self.expenses.delete(id))
    }

    fn set_expense_settled(&mut self, id: ExpenseId, settled: bool) -> StoreResult<()> {
        self.run("set_expense_settled", self.expenses.set_settled(id, settled))
    }

    fn receipts_in_period(&self, period: &Period) -> StoreResult<Vec<Receipt>> {
        self.run("receipts_in_period", self.receipts.find_in_period(period))
    }

    fn insert_receipt(&mut self, receipt: &Receipt) -> StoreResult<()> {
        self.run("insert_receipt", self.receipts.insert(receipt))
    }

    fn update_receipt(&mut self, receipt: &Receipt) -> StoreResult<()> {
        self.run("update_receipt", self.receipts.update(receipt))
    }

    fn delete_receipt(&mut self, id: ReceiptId) -> StoreResult<()> {
        self.run("delete_receipt", self.receipts.delete(id))
    }

    fn load_period(&self) -> StoreResult<Option<StoredPeriod>> {
        self.run("load_period", self.period.load())
    }

    fn save_period(&mut self, period: &StoredPeriod) -> StoreResult<()> {
        self.run("save_period", self.period.save(period))
    }

    fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.run("list_contacts", self.contacts.list())
    }

    fn find_contact_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.run("find_contact_by_name", self.contacts.find_by_name(name))
    }

    fn insert_contact(&mut self, contact: &Contact) -> StoreResult<()> {
        self.run("insert_contact", self.contacts.insert(contact))
    }

    fn update_contact(&mut self, contact: &Contact) -> StoreResult<()> {
        self.run("update_contact", self.contacts.update(contact))
    }

    fn delete_contact(&mut self, id: ContactId) -> StoreResult<()> {
        self.run("delete_contact", self.contacts.delete(id))
    }
}

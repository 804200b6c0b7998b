//! Initial database migration.
//!
//! Creates the contact directory, the expense and receipt ledgers and the
//! single-row period table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(CONTACTS_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;
        db.execute_unprepared(RECEIPTS_SQL).await?;
        db.execute_unprepared(PERIOD_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const CONTACTS_SQL: &str = r"
CREATE TABLE IF NOT EXISTS contacts (
    id          BLOB PRIMARY KEY NOT NULL,
    name        TEXT NOT NULL UNIQUE,
    first_name  TEXT,
    phone       TEXT,
    email       TEXT
);
";

// Amounts are cents, rates hundredths of a percent. NULL amounts read as zero.
const EXPENSES_SQL: &str = r"
CREATE TABLE IF NOT EXISTS expenses (
    id                   BLOB PRIMARY KEY NOT NULL,
    date                 TEXT NOT NULL,
    supplier             TEXT NOT NULL,
    contact_id           BLOB,
    gross_cents          INTEGER,
    vat_rate_hundredths  INTEGER NOT NULL DEFAULT 0,
    vat_cents            INTEGER,
    settled              INTEGER NOT NULL DEFAULT 0,
    comment              TEXT
);

CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
CREATE INDEX IF NOT EXISTS idx_expenses_unsettled ON expenses(settled) WHERE settled = 0;
CREATE INDEX IF NOT EXISTS idx_expenses_contact ON expenses(contact_id);
";

const RECEIPTS_SQL: &str = r"
CREATE TABLE IF NOT EXISTS receipts (
    id                   BLOB PRIMARY KEY NOT NULL,
    date                 TEXT NOT NULL,
    client               TEXT NOT NULL,
    contact_id           BLOB,
    payment_method       TEXT NOT NULL DEFAULT 'null',
    invoice_number       TEXT,
    gross_cents          INTEGER,
    vat_rate_hundredths  INTEGER NOT NULL DEFAULT 0,
    vat_cents            INTEGER,
    comment              TEXT
);

CREATE INDEX IF NOT EXISTS idx_receipts_date ON receipts(date);
CREATE INDEX IF NOT EXISTS idx_receipts_contact ON receipts(contact_id);
";

const PERIOD_SQL: &str = r"
CREATE TABLE IF NOT EXISTS period (
    id          INTEGER PRIMARY KEY NOT NULL CHECK (id = 1),
    month_name  TEXT NOT NULL,
    year        TEXT NOT NULL
);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS period;
DROP TABLE IF EXISTS receipts;
DROP TABLE IF EXISTS expenses;
DROP TABLE IF EXISTS contacts;
";

//! SQLite persistence for Compta.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//! - [`SqliteStore`], the blocking [`LedgerStore`](compta_core::store::LedgerStore)
//!   used by the bookkeeping core

pub mod entities;
pub mod error;
pub mod migration;
pub mod repositories;
pub mod store;

pub use error::DbError;
pub use repositories::{ContactRepository, ExpenseRepository, PeriodRepository, ReceiptRepository};
pub use store::SqliteStore;

use compta_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Connects and applies every pending migration.
pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = connect(config).await?;
    Migrator::up(&db, None).await?;
    tracing::debug!("migrations applied");
    Ok(db)
}

//! Expense repository.

use compta_core::ledger::Expense;
use compta_core::period::Period;
use compta_shared::types::{ContactId, ExpenseId};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::columns::{from_cents, to_cents, to_rate};
use crate::entities::expenses;
use crate::error::DbError;

const ENTITY: &str = "expense";

/// Expense repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Expenses dated inside `period`, in insertion order.
    pub async fn find_in_period(&self, period: &Period) -> Result<Vec<Expense>, DbError> {
        let rows = expenses::Entity::find()
            .filter(expenses::Column::Date.between(period.first_day(), period.last_day()))
            .order_by_asc(Expr::cust("rowid"))
            .all(&self.db)
            .await?;
        rows.into_iter().map(to_expense).collect()
    }

    /// Expenses not yet settled, in insertion order.
    pub async fn find_unsettled(&self) -> Result<Vec<Expense>, DbError> {
        let rows = expenses::Entity::find()
            .filter(expenses::Column::Settled.eq(false))
            .order_by_asc(Expr::cust("rowid"))
            .all(&self.db)
            .await?;
        rows.into_iter().map(to_expense).collect()
    }

    /// Expense by id.
    pub async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, DbError> {
        expenses::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(to_expense)
            .transpose()
    }

    /// Inserts an expense.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Conflict`] if the id is already stored.
    pub async fn insert(&self, expense: &Expense) -> Result<(), DbError> {
        if expenses::Entity::find_by_id(expense.id.into_inner())
            .one(&self.db)
            .await?
            .is_some()
        {
            return Err(DbError::Conflict(format!("expense {} already exists", expense.id)));
        }

        to_active_model(expense)?.insert(&self.db).await?;
        tracing::debug!(expense_id = %expense.id, date = %expense.date, "expense inserted");
        Ok(())
    }

    /// Replaces the expense with the same id.
    pub async fn update(&self, expense: &Expense) -> Result<(), DbError> {
        let result = expenses::Entity::update_many()
            .set(to_active_model(expense)?)
            .filter(expenses::Column::Id.eq(expense.id.into_inner()))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbError::not_found(ENTITY, expense.id));
        }
        Ok(())
    }

    /// Deletes an expense.
    pub async fn delete(&self, id: ExpenseId) -> Result<(), DbError> {
        let result = expenses::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }
        tracing::debug!(expense_id = %id, "expense deleted");
        Ok(())
    }

    /// Sets the settled flag of one expense.
    pub async fn set_settled(&self, id: ExpenseId, settled: bool) -> Result<(), DbError> {
        let result = expenses::Entity::update_many()
            .col_expr(expenses::Column::Settled, Expr::value(settled))
            .filter(expenses::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }
        Ok(())
    }
}

fn to_expense(row: expenses::Model) -> Result<Expense, DbError> {
    Ok(Expense {
        id: ExpenseId::from_uuid(row.id),
        date: row.date,
        supplier: row.supplier,
        contact_id: row.contact_id.map(ContactId::from_uuid),
        gross: from_cents(row.gross_cents),
        vat_rate: to_rate(row.vat_rate_hundredths, ENTITY, row.id)?,
        vat: from_cents(row.vat_cents),
        settled: row.settled,
        comment: row.comment,
    })
}

fn to_active_model(expense: &Expense) -> Result<expenses::ActiveModel, DbError> {
    Ok(expenses::ActiveModel {
        id: Set(expense.id.into_inner()),
        date: Set(expense.date),
        supplier: Set(expense.supplier.clone()),
        contact_id: Set(expense.contact_id.map(ContactId::into_inner)),
        gross_cents: Set(Some(to_cents(expense.gross, ENTITY, expense.id)?)),
        vat_rate_hundredths: Set(expense.vat_rate.to_hundredths()),
        vat_cents: Set(Some(to_cents(expense.vat, ENTITY, expense.id)?)),
        settled: Set(expense.settled),
        comment: Set(expense.comment.clone()),
    })
}

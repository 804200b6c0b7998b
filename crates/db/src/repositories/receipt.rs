//! Receipt repository.

use compta_core::ledger::{PaymentMethod, Receipt};
use compta_core::period::Period;
use compta_shared::types::{ContactId, ReceiptId};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::columns::{from_cents, to_cents, to_rate};
use crate::entities::receipts;
use crate::error::DbError;

const ENTITY: &str = "receipt";

/// Receipt repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ReceiptRepository {
    db: DatabaseConnection,
}

impl ReceiptRepository {
    /// Creates a new receipt repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Receipts dated inside `period`, in insertion order.
    pub async fn find_in_period(&self, period: &Period) -> Result<Vec<Receipt>, DbError> {
        let rows = receipts::Entity::find()
            .filter(receipts::Column::Date.between(period.first_day(), period.last_day()))
            .order_by_asc(Expr::cust("rowid"))
            .all(&self.db)
            .await?;
        rows.into_iter().map(to_receipt).collect()
    }

    /// Receipt by id.
    pub async fn find_by_id(&self, id: ReceiptId) -> Result<Option<Receipt>, DbError> {
        receipts::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(to_receipt)
            .transpose()
    }

    /// Inserts a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Conflict`] if the id is already stored.
    pub async fn insert(&self, receipt: &Receipt) -> Result<(), DbError> {
        if receipts::Entity::find_by_id(receipt.id.into_inner())
            .one(&self.db)
            .await?
            .is_some()
        {
            return Err(DbError::Conflict(format!("receipt {} already exists", receipt.id)));
        }

        to_active_model(receipt)?.insert(&self.db).await?;
        tracing::debug!(receipt_id = %receipt.id, date = %receipt.date, "receipt inserted");
        Ok(())
    }

    /// Replaces the receipt with the same id.
    pub async fn update(&self, receipt: &Receipt) -> Result<(), DbError> {
        let result = receipts::Entity::update_many()
            .set(to_active_model(receipt)?)
            .filter(receipts::Column::Id.eq(receipt.id.into_inner()))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbError::not_found(ENTITY, receipt.id));
        }
        Ok(())
    }

    /// Deletes a receipt.
    pub async fn delete(&self, id: ReceiptId) -> Result<(), DbError> {
        let result = receipts::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }
        tracing::debug!(receipt_id = %id, "receipt deleted");
        Ok(())
    }
}

fn to_receipt(row: receipts::Model) -> Result<Receipt, DbError> {
    let payment_method =
        PaymentMethod::parse(&row.payment_method).map_err(|err| DbError::corrupt(ENTITY, row.id, err))?;
    Ok(Receipt {
        id: ReceiptId::from_uuid(row.id),
        date: row.date,
        client: row.client,
        contact_id: row.contact_id.map(ContactId::from_uuid),
        payment_method,
        invoice_number: row.invoice_number,
        gross: from_cents(row.gross_cents),
        vat_rate: to_rate(row.vat_rate_hundredths, ENTITY, row.id)?,
        vat: from_cents(row.vat_cents),
        comment: row.comment,
    })
}

fn to_active_model(receipt: &Receipt) -> Result<receipts::ActiveModel, DbError> {
    Ok(receipts::ActiveModel {
        id: Set(receipt.id.into_inner()),
        date: Set(receipt.date),
        client: Set(receipt.client.clone()),
        contact_id: Set(receipt.contact_id.map(ContactId::into_inner)),
        payment_method: Set(receipt.payment_method.code().to_string()),
        invoice_number: Set(receipt.invoice_number.clone()),
        gross_cents: Set(Some(to_cents(receipt.gross, ENTITY, receipt.id)?)),
        vat_rate_hundredths: Set(receipt.vat_rate.to_hundredths()),
        vat_cents: Set(Some(to_cents(receipt.vat, ENTITY, receipt.id)?)),
        comment: Set(receipt.comment.clone()),
    })
}

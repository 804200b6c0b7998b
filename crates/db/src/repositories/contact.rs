//! Contact repository for the supplier and client directory.

use compta_core::contact::Contact;
use compta_shared::types::ContactId;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{contacts, expenses, receipts};
use crate::error::DbError;

/// Contact repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    db: DatabaseConnection,
}

impl ContactRepository {
    /// Creates a new contact repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All contacts in insertion order.
    pub async fn list(&self) -> Result<Vec<Contact>, DbError> {
        let rows = contacts::Entity::find()
            .order_by_asc(Expr::cust("rowid"))
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_contact).collect())
    }

    /// Contact with exactly this name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, DbError> {
        let row = contacts::Entity::find()
            .filter(contacts::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(row.map(to_contact))
    }

    /// Inserts a contact.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Conflict`] if the id or the name is already used.
    pub async fn insert(&self, contact: &Contact) -> Result<(), DbError> {
        if contacts::Entity::find_by_id(contact.id.into_inner())
            .one(&self.db)
            .await?
            .is_some()
        {
            return Err(DbError::Conflict(format!("contact {} already exists", contact.id)));
        }
        if self.find_by_name(&contact.name).await?.is_some() {
            return Err(DbError::Conflict(format!("contact '{}' already exists", contact.name)));
        }

        to_active_model(contact).insert(&self.db).await?;
        tracing::debug!(contact_id = %contact.id, name = %contact.name, "contact inserted");
        Ok(())
    }

    /// Replaces the contact with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] for an unknown id and [`DbError::Conflict`]
    /// when renaming onto another contact's name.
    pub async fn update(&self, contact: &Contact) -> Result<(), DbError> {
        if let Some(existing) = self.find_by_name(&contact.name).await?
            && existing.id != contact.id
        {
            return Err(DbError::Conflict(format!("contact '{}' already exists", contact.name)));
        }

        let result = contacts::Entity::update_many()
            .set(to_active_model(contact))
            .filter(contacts::Column::Id.eq(contact.id.into_inner()))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbError::not_found("contact", contact.id));
        }
        Ok(())
    }

    /// Deletes a contact and clears it from every expense and receipt.
    ///
    /// Transactions keep their counterpart name.
    pub async fn delete(&self, id: ContactId) -> Result<(), DbError> {
        let uuid = id.into_inner();
        let txn = self.db.begin().await?;

        expenses::Entity::update_many()
            .col_expr(expenses::Column::ContactId, Expr::value(Option::<Uuid>::None))
            .filter(expenses::Column::ContactId.eq(uuid))
            .exec(&txn)
            .await?;
        receipts::Entity::update_many()
            .col_expr(receipts::Column::ContactId, Expr::value(Option::<Uuid>::None))
            .filter(receipts::Column::ContactId.eq(uuid))
            .exec(&txn)
            .await?;

        let result = contacts::Entity::delete_by_id(uuid).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbError::not_found("contact", id));
        }

        txn.commit().await?;
        tracing::debug!(contact_id = %id, "contact deleted");
        Ok(())
    }
}

fn to_contact(row: contacts::Model) -> Contact {
    Contact {
        id: ContactId::from_uuid(row.id),
        name: row.name,
        first_name: row.first_name,
        phone: row.phone,
        email: row.email,
    }
}

fn to_active_model(contact: &Contact) -> contacts::ActiveModel {
    contacts::ActiveModel {
        id: Set(contact.id.into_inner()),
        name: Set(contact.name.clone()),
        first_name: Set(contact.first_name.clone()),
        phone: Set(contact.phone.clone()),
        email: Set(contact.email.clone()),
    }
}

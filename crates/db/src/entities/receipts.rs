//! `SeaORM` Entity for receipts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub client: String,
    pub contact_id: Option<Uuid>,
    /// Stored code: `null`, `chèque` or `virement`.
    pub payment_method: String,
    pub invoice_number: Option<String>,
    pub gross_cents: Option<i64>,
    pub vat_rate_hundredths: i64,
    pub vat_cents: Option<i64>,
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

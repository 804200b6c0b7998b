//! `SeaORM` Entity for expenses table.
//!
//! Amounts are integer cents and may be NULL in rows written by older tools.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub supplier: String,
    pub contact_id: Option<Uuid>,
    pub gross_cents: Option<i64>,
    pub vat_rate_hundredths: i64,
    pub vat_cents: Option<i64>,
    pub settled: bool,
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

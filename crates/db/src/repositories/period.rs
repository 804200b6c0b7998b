//! Repository for the persisted reporting period.

use compta_core::period::StoredPeriod;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::entities::period;
use crate::error::DbError;

/// Reads and upserts the single period row.
#[derive(Debug, Clone)]
pub struct PeriodRepository {
    db: DatabaseConnection,
}

impl PeriodRepository {
    /// Creates a new period repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The saved period, if any.
    pub async fn load(&self) -> Result<Option<StoredPeriod>, DbError> {
        let row = period::Entity::find_by_id(period::SINGLETON_ID)
            .one(&self.db)
            .await?;
        Ok(row.map(|row| StoredPeriod::new(row.month_name, row.year)))
    }

    /// Inserts the period row or overwrites it.
    pub async fn save(&self, stored: &StoredPeriod) -> Result<(), DbError> {
        let model = period::ActiveModel {
            id: Set(period::SINGLETON_ID),
            month_name: Set(stored.month_name.clone()),
            year: Set(stored.year.clone()),
        };

        period::Entity::insert(model)
            .on_conflict(
                OnConflict::column(period::Column::Id)
                    .update_columns([period::Column::MonthName, period::Column::Year])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        tracing::debug!(month = %stored.month_name, year = %stored.year, "period saved");
        Ok(())
    }
}

//! Production factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ProductionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test productions under a pair.
pub struct ProductionFactory<'a> {
    db: &'a DatabaseConnection,
    pair_id: i32,
    start_date: NaiveDate,
    status: ProductionStatus,
}

impl<'a> ProductionFactory<'a> {
    /// Defaults to an ACTIVE production starting today.
    pub fn new(db: &'a DatabaseConnection, pair_id: i32) -> Self {
        Self {
            db,
            pair_id,
            start_date: Utc::now().date_naive(),
            status: ProductionStatus::Active,
        }
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn status(mut self, status: ProductionStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the production. COMPLETED productions get an end timestamp.
    pub async fn build(self) -> Result<entity::production::Model, DbErr> {
        let now = Utc::now();
        let end_date = (self.status == ProductionStatus::Completed).then_some(now);
        entity::production::ActiveModel {
            pair_id: ActiveValue::Set(self.pair_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(end_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ACTIVE production starting today.
pub async fn create_production(
    db: &DatabaseConnection,
    pair_id: i32,
) -> Result<entity::production::Model, DbErr> {
    ProductionFactory::new(db, pair_id).build().await
}

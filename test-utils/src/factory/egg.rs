//! Egg factory.

use chrono::{Days, NaiveDate, Utc};
use entity::sea_orm_active_enums::EggStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test eggs under a production.
///
/// The estimated hatch date is always derived as laid date + 21 days.
pub struct EggFactory<'a> {
    db: &'a DatabaseConnection,
    production_id: i32,
    egg_order: i32,
    laid_date: NaiveDate,
    status: EggStatus,
}

impl<'a> EggFactory<'a> {
    /// Defaults to a PENDING first egg laid today.
    pub fn new(db: &'a DatabaseConnection, production_id: i32) -> Self {
        Self {
            db,
            production_id,
            egg_order: 1,
            laid_date: Utc::now().date_naive(),
            status: EggStatus::Pending,
        }
    }

    pub fn egg_order(mut self, egg_order: i32) -> Self {
        self.egg_order = egg_order;
        self
    }

    pub fn laid_date(mut self, laid_date: NaiveDate) -> Self {
        self.laid_date = laid_date;
        self
    }

    pub fn status(mut self, status: EggStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::egg::Model, DbErr> {
        let now = Utc::now();
        let est_hatch_date = self.laid_date + Days::new(21);
        let hatch_date = (self.status == EggStatus::Hatched).then_some(now);
        entity::egg::ActiveModel {
            production_id: ActiveValue::Set(self.production_id),
            egg_order: ActiveValue::Set(self.egg_order),
            laid_date: ActiveValue::Set(self.laid_date),
            est_hatch_date: ActiveValue::Set(est_hatch_date),
            hatch_date: ActiveValue::Set(hatch_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING egg with the given ordinal.
pub async fn create_egg(
    db: &DatabaseConnection,
    production_id: i32,
    egg_order: i32,
) -> Result<entity::egg::Model, DbErr> {
    EggFactory::new(db, production_id)
        .egg_order(egg_order)
        .build()
        .await
}

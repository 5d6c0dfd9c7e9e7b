//! Pair factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::PairStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test pairs.
///
/// Inserts the pair row only; bird statuses and the production are left to the caller
/// (see `helpers::create_active_pair` for the full pairing shape).
pub struct PairFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    sire_id: i32,
    dam_id: i32,
    cage_name: String,
    pairing_date: NaiveDate,
    status: PairStatus,
}

impl<'a> PairFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, sire_id: i32, dam_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            sire_id,
            dam_id,
            cage_name: format!("Cage {}", id),
            pairing_date: Utc::now().date_naive(),
            status: PairStatus::Active,
        }
    }

    pub fn cage_name(mut self, cage_name: impl Into<String>) -> Self {
        self.cage_name = cage_name.into();
        self
    }

    pub fn pairing_date(mut self, pairing_date: NaiveDate) -> Self {
        self.pairing_date = pairing_date;
        self
    }

    pub fn status(mut self, status: PairStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the pair. HISTORY pairs get an end timestamp.
    pub async fn build(self) -> Result<entity::pair::Model, DbErr> {
        let now = Utc::now();
        let end_date = (self.status == PairStatus::History).then_some(now);
        entity::pair::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            cage_name: ActiveValue::Set(self.cage_name),
            sire_id: ActiveValue::Set(self.sire_id),
            dam_id: ActiveValue::Set(self.dam_id),
            pairing_date: ActiveValue::Set(self.pairing_date),
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

/// Creates an ACTIVE pair with default values.
pub async fn create_pair(
    db: &DatabaseConnection,
    user_id: i32,
    sire_id: i32,
    dam_id: i32,
) -> Result<entity::pair::Model, DbErr> {
    PairFactory::new(db, user_id, sire_id, dam_id).build().await
}

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::ProductionStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::production::Production;

pub struct ProductionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an ACTIVE production for a pair.
    pub async fn create(&self, pair_id: i32, start_date: NaiveDate) -> Result<Production, DbErr> {
        let now = Utc::now();

        let entity = entity::production::ActiveModel {
            pair_id: ActiveValue::Set(pair_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(None),
            status: ActiveValue::Set(ProductionStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Production::from_entity(entity))
    }

    /// Finds the ACTIVE production of a pair.
    ///
    /// At most one is expected; the newest wins if that ever fails to hold.
    pub async fn find_active_by_pair(&self, pair_id: i32) -> Result<Option<Production>, DbErr> {
        let entity = entity::prelude::Production::find()
            .filter(entity::production::Column::PairId.eq(pair_id))
            .filter(entity::production::Column::Status.eq(ProductionStatus::Active))
            .order_by_desc(entity::production::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Production::from_entity))
    }

    /// Completes every ACTIVE production of a pair, stamping the end timestamp.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of productions completed
    pub async fn complete_active_by_pair(
        &self,
        pair_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Production::update_many()
            .col_expr(
                entity::production::Column::Status,
                Expr::value(ProductionStatus::Completed),
            )
            .col_expr(entity::production::Column::EndDate, Expr::value(now))
            .col_expr(entity::production::Column::UpdatedAt, Expr::value(now))
            .filter(entity::production::Column::PairId.eq(pair_id))
            .filter(entity::production::Column::Status.eq(ProductionStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

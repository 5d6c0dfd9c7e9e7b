use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PairStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::pair::{CreatePairParam, Pair};

pub struct PairRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PairRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new ACTIVE pair.
    ///
    /// Bird statuses are not touched; pairing claims the birds separately.
    pub async fn create(&self, param: CreatePairParam) -> Result<Pair, DbErr> {
        let now = Utc::now();

        let entity = entity::pair::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            cage_name: ActiveValue::Set(param.cage_name),
            sire_id: ActiveValue::Set(param.sire_id),
            dam_id: ActiveValue::Set(param.dam_id),
            pairing_date: ActiveValue::Set(param.pairing_date),
            end_date: ActiveValue::Set(None),
            status: ActiveValue::Set(PairStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pair::from_entity(entity))
    }

    /// Gets a user's ACTIVE pairs, ordered by ID.
    pub async fn find_active_by_owner(&self, user_id: i32) -> Result<Vec<Pair>, DbErr> {
        let entities = entity::prelude::Pair::find()
            .filter(entity::pair::Column::UserId.eq(user_id))
            .filter(entity::pair::Column::Status.eq(PairStatus::Active))
            .order_by_asc(entity::pair::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pair::from_entity).collect())
    }

    /// Finds a pair of any status if it belongs to the user.
    pub async fn find_owned(&self, user_id: i32, pair_id: i32) -> Result<Option<Pair>, DbErr> {
        let entity = entity::prelude::Pair::find_by_id(pair_id)
            .filter(entity::pair::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Pair::from_entity))
    }

    /// Finds an ACTIVE pair if it belongs to the user.
    pub async fn find_active_owned(
        &self,
        user_id: i32,
        pair_id: i32,
    ) -> Result<Option<Pair>, DbErr> {
        let entity = entity::prelude::Pair::find_by_id(pair_id)
            .filter(entity::pair::Column::UserId.eq(user_id))
            .filter(entity::pair::Column::Status.eq(PairStatus::Active))
            .one(self.db)
            .await?;

        Ok(entity.map(Pair::from_entity))
    }

    /// Moves an ACTIVE pair to HISTORY and stamps its end.
    ///
    /// # Returns
    /// - `Ok(true)` - Pair closed
    /// - `Ok(false)` - Pair missing or already HISTORY
    pub async fn close(&self, pair_id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Pair::update_many()
            .col_expr(
                entity::pair::Column::Status,
                Expr::value(PairStatus::History),
            )
            .col_expr(entity::pair::Column::EndDate, Expr::value(now))
            .col_expr(entity::pair::Column::UpdatedAt, Expr::value(now))
            .filter(entity::pair::Column::Id.eq(pair_id))
            .filter(entity::pair::Column::Status.eq(PairStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

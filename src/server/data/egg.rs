//! Egg data repository.
//!
//! Eggs carry no owner column; ownership is resolved by joining through the production to
//! its pair.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EggStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::production::{CreateEggParam, Egg};

pub struct EggRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EggRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a PENDING egg.
    pub async fn create(&self, param: CreateEggParam) -> Result<Egg, DbErr> {
        let now = Utc::now();

        let entity = entity::egg::ActiveModel {
            production_id: ActiveValue::Set(param.production_id),
            egg_order: ActiveValue::Set(param.egg_order),
            laid_date: ActiveValue::Set(param.laid_date),
            est_hatch_date: ActiveValue::Set(param.est_hatch_date),
            hatch_date: ActiveValue::Set(None),
            status: ActiveValue::Set(EggStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Egg::from_entity(entity))
    }

    /// Counts the eggs currently stored for a production.
    pub async fn count_by_production(&self, production_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Egg::find()
            .filter(entity::egg::Column::ProductionId.eq(production_id))
            .count(self.db)
            .await
    }

    /// Gets a production's eggs ordered by ordinal.
    pub async fn find_by_production(&self, production_id: i32) -> Result<Vec<Egg>, DbErr> {
        let entities = entity::prelude::Egg::find()
            .filter(entity::egg::Column::ProductionId.eq(production_id))
            .order_by_asc(entity::egg::Column::EggOrder)
            .order_by_asc(entity::egg::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Egg::from_entity).collect())
    }

    /// Finds an egg whose production belongs to a pair owned by the user.
    ///
    /// # Returns
    /// - `Ok(Some(Egg))` - Egg found under one of the user's pairs
    /// - `Ok(None)` - No such egg, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owned(&self, user_id: i32, egg_id: i32) -> Result<Option<Egg>, DbErr> {
        let entity = entity::prelude::Egg::find_by_id(egg_id)
            .join(JoinType::InnerJoin, entity::egg::Relation::Production.def())
            .join(JoinType::InnerJoin, entity::production::Relation::Pair.def())
            .filter(entity::pair::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Egg::from_entity))
    }

    /// Sets an egg's status; moving to HATCHED also stamps the hatch timestamp.
    ///
    /// Any other status leaves the hatch timestamp as it was.
    pub async fn update_status(
        &self,
        egg_id: i32,
        status: EggStatus,
        now: DateTime<Utc>,
    ) -> Result<Egg, DbErr> {
        let mut model = entity::egg::ActiveModel {
            id: ActiveValue::Unchanged(egg_id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        if status == EggStatus::Hatched {
            model.hatch_date = ActiveValue::Set(Some(now));
        }

        let entity = model.update(self.db).await?;

        Ok(Egg::from_entity(entity))
    }

    /// Permanently deletes an egg. Remaining ordinals are left as they are.
    ///
    /// # Returns
    /// - `Ok(true)` - Egg deleted
    /// - `Ok(false)` - No egg with that ID
    pub async fn delete(&self, egg_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Egg::delete_by_id(egg_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

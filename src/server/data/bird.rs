//! Bird data repository.
//!
//! Live birds are those with a null `deleted_at`. Listings only ever return live birds, but
//! lookups by ID used to resolve parents and pair members include soft-deleted ones.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BirdStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::bird::{Bird, CreateBirdParam, UpdateBirdParam};

pub struct BirdRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BirdRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new AVAILABLE bird.
    ///
    /// # Returns
    /// - `Ok(Bird)` - The created bird
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBirdParam) -> Result<Bird, DbErr> {
        let now = Utc::now();

        let entity = entity::bird::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            ring_number: ActiveValue::Set(param.ring_number),
            species: ActiveValue::Set(param.species),
            mutation: ActiveValue::Set(param.mutation),
            gender: ActiveValue::Set(param.gender),
            status: ActiveValue::Set(BirdStatus::Available),
            sire_id: ActiveValue::Set(param.sire_id),
            dam_id: ActiveValue::Set(param.dam_id),
            dob: ActiveValue::Set(param.dob),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bird::from_entity(entity))
    }

    /// Gets all live birds owned by a user, ordered by ID.
    pub async fn find_live_by_owner(&self, user_id: i32) -> Result<Vec<Bird>, DbErr> {
        let entities = entity::prelude::Bird::find()
            .filter(entity::bird::Column::UserId.eq(user_id))
            .filter(entity::bird::Column::DeletedAt.is_null())
            .order_by_asc(entity::bird::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bird::from_entity).collect())
    }

    /// Finds a live bird by ID if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(Some(Bird))` - Live bird owned by the user
    /// - `Ok(None)` - No such bird, owned by someone else, or soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_live_owned(&self, user_id: i32, bird_id: i32) -> Result<Option<Bird>, DbErr> {
        let entity = entity::prelude::Bird::find_by_id(bird_id)
            .filter(entity::bird::Column::UserId.eq(user_id))
            .filter(entity::bird::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Bird::from_entity))
    }

    /// Finds a bird by ID if it belongs to the user, soft-deleted or not.
    pub async fn find_owned(&self, user_id: i32, bird_id: i32) -> Result<Option<Bird>, DbErr> {
        let entity = entity::prelude::Bird::find_by_id(bird_id)
            .filter(entity::bird::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Bird::from_entity))
    }

    /// Loads birds by ID regardless of soft-deletion, keyed by ID.
    ///
    /// IDs without a row are simply absent from the map.
    pub async fn find_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, Bird>, DbErr> {
        let mut ids: Vec<i32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Bird::find()
            .filter(entity::bird::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Bird::from_entity(e)))
            .collect())
    }

    /// Replaces all mutable fields of a bird.
    ///
    /// Ownership must be verified by the caller.
    pub async fn update(&self, param: UpdateBirdParam) -> Result<Bird, DbErr> {
        let entity = entity::bird::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            ring_number: ActiveValue::Set(param.ring_number),
            species: ActiveValue::Set(param.species),
            mutation: ActiveValue::Set(param.mutation),
            gender: ActiveValue::Set(param.gender),
            status: ActiveValue::Set(param.status),
            sire_id: ActiveValue::Set(param.sire_id),
            dam_id: ActiveValue::Set(param.dam_id),
            dob: ActiveValue::Set(param.dob),
            notes: ActiveValue::Set(param.notes),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Bird::from_entity(entity))
    }

    /// Stamps `deleted_at` on a live bird.
    ///
    /// # Returns
    /// - `Ok(true)` - Bird soft-deleted
    /// - `Ok(false)` - No live bird with that ID
    pub async fn soft_delete(&self, bird_id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Bird::update_many()
            .col_expr(entity::bird::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::bird::Column::UpdatedAt, Expr::value(now))
            .filter(entity::bird::Column::Id.eq(bird_id))
            .filter(entity::bird::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks a sire and dam as PAIRED if, and only if, each is live, AVAILABLE and owned by
    /// the user.
    ///
    /// The guard lives in the UPDATE's WHERE clause, so two concurrent pairings cannot both
    /// claim the same bird. Callers must check that exactly two rows were affected.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of birds claimed (2 on success, fewer when a bird was unusable
    ///   or `sire_id == dam_id`)
    pub async fn claim_for_pairing(
        &self,
        user_id: i32,
        sire_id: i32,
        dam_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Bird::update_many()
            .col_expr(
                entity::bird::Column::Status,
                Expr::value(BirdStatus::Paired),
            )
            .col_expr(entity::bird::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::bird::Column::Id.is_in([sire_id, dam_id]))
            .filter(entity::bird::Column::UserId.eq(user_id))
            .filter(entity::bird::Column::Status.eq(BirdStatus::Available))
            .filter(entity::bird::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the given birds to AVAILABLE.
    pub async fn release(&self, bird_ids: [i32; 2]) -> Result<u64, DbErr> {
        let result = entity::prelude::Bird::update_many()
            .col_expr(
                entity::bird::Column::Status,
                Expr::value(BirdStatus::Available),
            )
            .col_expr(entity::bird::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::bird::Column::Id.is_in(bird_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

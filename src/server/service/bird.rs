use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::BirdStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::bird::BirdRepository,
    error::AppError,
    model::bird::{Bird, BirdWithParents, CreateBirdParam, UpdateBirdParam},
};

pub struct BirdService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirdService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's live birds by ID, each with its sire and dam resolved.
    ///
    /// Parents resolve even when sold, dead or soft-deleted.
    pub async fn list(&self, user_id: i32) -> Result<Vec<BirdWithParents>, AppError> {
        let repo = BirdRepository::new(self.db);

        let birds = repo.find_live_by_owner(user_id).await?;

        let parent_ids: Vec<i32> = birds
            .iter()
            .flat_map(|b| [b.sire_id, b.dam_id])
            .flatten()
            .collect();
        let parents = repo.find_by_ids(parent_ids).await?;

        Ok(birds
            .into_iter()
            .map(|bird| attach_parents(bird, &parents))
            .collect())
    }

    /// Registers a bird as AVAILABLE.
    ///
    /// # Returns
    /// - `Ok(BirdWithParents)` - Created bird
    /// - `Err(AppError::BadRequest)` - A parent link does not reference one of the user's birds
    pub async fn create(&self, param: CreateBirdParam) -> Result<BirdWithParents, AppError> {
        let repo = BirdRepository::new(self.db);

        self.validate_parents(param.user_id, None, param.sire_id, param.dam_id)
            .await?;

        let bird = repo.create(param).await?;

        self.with_parents(bird).await
    }

    /// Replaces every mutable field of a live bird.
    ///
    /// # Returns
    /// - `Ok(BirdWithParents)` - Updated bird
    /// - `Err(AppError::NotFound)` - No live bird with that ID owned by the user
    /// - `Err(AppError::BadRequest)` - Invalid parent link
    pub async fn update(&self, param: UpdateBirdParam) -> Result<BirdWithParents, AppError> {
        let repo = BirdRepository::new(self.db);

        if repo.find_live_owned(param.user_id, param.id).await?.is_none() {
            return Err(bird_not_found());
        }

        self.validate_parents(param.user_id, Some(param.id), param.sire_id, param.dam_id)
            .await?;

        let bird = repo.update(param).await?;

        self.with_parents(bird).await
    }

    /// Soft-deletes a bird.
    ///
    /// # Returns
    /// - `Ok(())` - Bird soft-deleted
    /// - `Err(AppError::NotFound)` - No live bird with that ID owned by the user
    /// - `Err(AppError::Unavailable)` - Bird is currently paired
    pub async fn delete(&self, user_id: i32, bird_id: i32) -> Result<(), AppError> {
        let repo = BirdRepository::new(self.db);

        let bird = repo
            .find_live_owned(user_id, bird_id)
            .await?
            .ok_or_else(bird_not_found)?;

        if bird.status == BirdStatus::Paired {
            return Err(AppError::Unavailable(
                "Bird is in an active pair, disband the pair first".to_string(),
            ));
        }

        if !repo.soft_delete(bird.id, Utc::now()).await? {
            return Err(bird_not_found());
        }

        Ok(())
    }

    /// Checks that each given parent is one of the user's birds and not the bird itself.
    async fn validate_parents(
        &self,
        user_id: i32,
        bird_id: Option<i32>,
        sire_id: Option<i32>,
        dam_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = BirdRepository::new(self.db);

        for (field, parent_id) in [("sire_id", sire_id), ("dam_id", dam_id)] {
            let Some(parent_id) = parent_id else {
                continue;
            };

            if Some(parent_id) == bird_id {
                return Err(AppError::BadRequest(format!(
                    "{} cannot reference the bird itself",
                    field
                )));
            }

            if repo.find_owned(user_id, parent_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "{} does not reference one of your birds",
                    field
                )));
            }
        }

        Ok(())
    }

    async fn with_parents(&self, bird: Bird) -> Result<BirdWithParents, AppError> {
        let parents = BirdRepository::new(self.db)
            .find_by_ids([bird.sire_id, bird.dam_id].into_iter().flatten())
            .await?;

        Ok(attach_parents(bird, &parents))
    }
}

fn attach_parents(bird: Bird, parents: &HashMap<i32, Bird>) -> BirdWithParents {
    let sire = bird.sire_id.and_then(|id| parents.get(&id).cloned());
    let dam = bird.dam_id.and_then(|id| parents.get(&id).cloned());

    BirdWithParents { bird, sire, dam }
}

fn bird_not_found() -> AppError {
    AppError::NotFound("Bird not found".to_string())
}

//! Pairing, breeding cycles and eggs.
//!
//! Multi-step writes run inside a database transaction; dropping an uncommitted transaction on
//! an early return rolls every write back.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{EggStatus, PairStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        bird::BirdRepository, egg::EggRepository, pair::PairRepository,
        production::ProductionRepository,
    },
    error::AppError,
    model::{
        pair::{CreatePairParam, Pair, PairWithBirds},
        production::{CreateEggParam, Egg, ProductionWithEggs},
    },
};

pub struct BreedingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BreedingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's ACTIVE pairs with both birds resolved.
    pub async fn list_active_pairs(&self, user_id: i32) -> Result<Vec<PairWithBirds>, AppError> {
        let pairs = PairRepository::new(self.db)
            .find_active_by_owner(user_id)
            .await?;

        let birds = BirdRepository::new(self.db)
            .find_by_ids(pairs.iter().flat_map(|p| [p.sire_id, p.dam_id]))
            .await?;

        Ok(pairs
            .into_iter()
            .map(|pair| PairWithBirds {
                sire: birds.get(&pair.sire_id).cloned(),
                dam: birds.get(&pair.dam_id).cloned(),
                pair,
            })
            .collect())
    }

    /// Pairs two birds and opens the pair's first production.
    ///
    /// Both birds are claimed with one conditional UPDATE; unless exactly two rows change
    /// (both live, AVAILABLE, owned by the user and distinct) nothing is written.
    ///
    /// # Returns
    /// - `Ok(PairWithBirds)` - ACTIVE pair with its PAIRED birds
    /// - `Err(AppError::Unavailable)` - A bird is not available for pairing
    pub async fn create_pair(&self, param: CreatePairParam) -> Result<PairWithBirds, AppError> {
        let txn = self.db.begin().await?;

        let claimed = BirdRepository::new(&txn)
            .claim_for_pairing(param.user_id, param.sire_id, param.dam_id)
            .await?;

        if claimed != 2 {
            txn.rollback().await?;

            return Err(AppError::Unavailable(
                "Both birds must be distinct, available and yours".to_string(),
            ));
        }

        let pairing_date = param.pairing_date;
        let pair = PairRepository::new(&txn).create(param).await?;
        ProductionRepository::new(&txn)
            .create(pair.id, pairing_date)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} paired birds {} and {} as pair {}",
            pair.user_id,
            pair.sire_id,
            pair.dam_id,
            pair.id
        );

        let birds = BirdRepository::new(self.db)
            .find_by_ids([pair.sire_id, pair.dam_id])
            .await?;

        Ok(PairWithBirds {
            sire: birds.get(&pair.sire_id).cloned(),
            dam: birds.get(&pair.dam_id).cloned(),
            pair,
        })
    }

    /// Disbands an ACTIVE pair.
    ///
    /// Closes the pair, returns both birds to AVAILABLE and completes the pair's ACTIVE
    /// production, all in one transaction. Eggs are left untouched.
    ///
    /// # Returns
    /// - `Ok(Pair)` - The pair as HISTORY
    /// - `Err(AppError::NotFound)` - No ACTIVE pair with that ID owned by the user
    pub async fn disband_pair(&self, user_id: i32, pair_id: i32) -> Result<Pair, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let pair = PairRepository::new(&txn)
            .find_active_owned(user_id, pair_id)
            .await?
            .ok_or_else(active_pair_not_found)?;

        if !PairRepository::new(&txn).close(pair.id, now).await? {
            return Err(active_pair_not_found());
        }

        BirdRepository::new(&txn)
            .release([pair.sire_id, pair.dam_id])
            .await?;
        ProductionRepository::new(&txn)
            .complete_active_by_pair(pair.id, now)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} disbanded pair {}", user_id, pair.id);

        Ok(closed(pair, now))
    }

    /// Gets the pair's ACTIVE production with its eggs in laying order.
    ///
    /// # Returns
    /// - `Ok(Some(ProductionWithEggs))` - Active production found
    /// - `Ok(None)` - Pair has no ACTIVE production
    /// - `Err(AppError::NotFound)` - Pair does not exist or is not the user's
    pub async fn get_active_production(
        &self,
        user_id: i32,
        pair_id: i32,
    ) -> Result<Option<ProductionWithEggs>, AppError> {
        let pair = PairRepository::new(self.db)
            .find_owned(user_id, pair_id)
            .await?
            .ok_or_else(pair_not_found)?;

        let Some(production) = ProductionRepository::new(self.db)
            .find_active_by_pair(pair.id)
            .await?
        else {
            return Ok(None);
        };

        let eggs = EggRepository::new(self.db)
            .find_by_production(production.id)
            .await?;

        Ok(Some(ProductionWithEggs { production, eggs }))
    }

    /// Records a laid egg in the pair's ACTIVE production.
    ///
    /// Opens a new production starting `today` when the pair has none. The egg's ordinal is
    /// the production's egg count plus one.
    ///
    /// HISTORY pairs are accepted too. A production opened for one stays ACTIVE, since only
    /// disbanding an ACTIVE pair completes productions.
    ///
    /// # Returns
    /// - `Ok(Egg)` - PENDING egg with its estimated hatch date
    /// - `Err(AppError::BadRequest)` - Estimated hatch date falls past the last representable date
    /// - `Err(AppError::NotFound)` - Pair does not exist or is not the user's
    pub async fn add_egg(
        &self,
        user_id: i32,
        pair_id: i32,
        laid_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Egg, AppError> {
        let est_hatch_date = Egg::estimated_hatch(laid_date)
            .ok_or_else(|| AppError::BadRequest("laid_date is out of range".to_string()))?;

        let txn = self.db.begin().await?;

        let pair = PairRepository::new(&txn)
            .find_owned(user_id, pair_id)
            .await?
            .ok_or_else(pair_not_found)?;

        let production_repo = ProductionRepository::new(&txn);
        let production = match production_repo.find_active_by_pair(pair.id).await? {
            Some(production) => production,
            None => production_repo.create(pair.id, today).await?,
        };

        let egg_repo = EggRepository::new(&txn);
        let count = egg_repo.count_by_production(production.id).await?;
        let egg = egg_repo
            .create(CreateEggParam {
                production_id: production.id,
                egg_order: count as i32 + 1,
                laid_date,
                est_hatch_date,
            })
            .await?;

        txn.commit().await?;

        Ok(egg)
    }

    /// Sets an egg's status. HATCHED stamps the hatch timestamp.
    ///
    /// # Returns
    /// - `Ok(Egg)` - Updated egg
    /// - `Err(AppError::NotFound)` - Egg does not exist under one of the user's pairs
    pub async fn update_egg_status(
        &self,
        user_id: i32,
        egg_id: i32,
        status: EggStatus,
    ) -> Result<Egg, AppError> {
        let repo = EggRepository::new(self.db);

        let egg = repo
            .find_owned(user_id, egg_id)
            .await?
            .ok_or_else(egg_not_found)?;

        Ok(repo.update_status(egg.id, status, Utc::now()).await?)
    }

    /// Permanently deletes an egg without renumbering the rest.
    pub async fn delete_egg(&self, user_id: i32, egg_id: i32) -> Result<(), AppError> {
        let repo = EggRepository::new(self.db);

        let egg = repo
            .find_owned(user_id, egg_id)
            .await?
            .ok_or_else(egg_not_found)?;

        if !repo.delete(egg.id).await? {
            return Err(egg_not_found());
        }

        Ok(())
    }
}

fn closed(pair: Pair, now: DateTime<Utc>) -> Pair {
    Pair {
        status: PairStatus::History,
        end_date: Some(now),
        ..pair
    }
}

fn pair_not_found() -> AppError {
    AppError::NotFound("Pair not found".to_string())
}

fn active_pair_not_found() -> AppError {
    AppError::NotFound("Active pair not found".to_string())
}

fn egg_not_found() -> AppError {
    AppError::NotFound("Egg not found".to_string())
}

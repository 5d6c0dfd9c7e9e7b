//! Shared helpers for factory methods: unique id generation and dependency chains.

use entity::sea_orm_active_enums::{BirdStatus, Gender};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{bird::BirdFactory, pair::PairFactory, production::ProductionFactory};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an ACTIVE pair for `user_id` the way pairing leaves the database:
/// a PAIRED male sire, a PAIRED female dam, the pair and its ACTIVE production.
///
/// # Returns
/// - `Ok((sire, dam, pair, production))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_pair(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<
    (
        entity::bird::Model,
        entity::bird::Model,
        entity::pair::Model,
        entity::production::Model,
    ),
    DbErr,
> {
    let sire = BirdFactory::new(db, user_id)
        .gender(Gender::Male)
        .status(BirdStatus::Paired)
        .build()
        .await?;
    let dam = BirdFactory::new(db, user_id)
        .gender(Gender::Female)
        .status(BirdStatus::Paired)
        .build()
        .await?;
    let pair = PairFactory::new(db, user_id, sire.id, dam.id).build().await?;
    let production = ProductionFactory::new(db, pair.id)
        .start_date(pair.pairing_date)
        .build()
        .await?;

    Ok((sire, dam, pair, production))
}

use super::*;

/// Tests finding the active production when a completed one also exists.
///
/// Expected: Ok(Some) with the ACTIVE production
#[tokio::test]
async fn finds_active_production() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sire = factory::create_bird(db, user.id).await?;
    let dam = factory::create_bird(db, user.id).await?;
    let pair = factory::create_pair(db, user.id, sire.id, dam.id).await?;

    factory::production::ProductionFactory::new(db, pair.id)
        .status(ProductionStatus::Completed)
        .build()
        .await?;
    let active = factory::create_production(db, pair.id).await?;

    let found = ProductionRepository::new(db)
        .find_active_by_pair(pair.id)
        .await?;

    assert_eq!(found.map(|p| p.id), Some(active.id));

    Ok(())
}

/// Tests a pair with only completed productions.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_active_production() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sire = factory::create_bird(db, user.id).await?;
    let dam = factory::create_bird(db, user.id).await?;
    let pair = factory::create_pair(db, user.id, sire.id, dam.id).await?;

    factory::production::ProductionFactory::new(db, pair.id)
        .status(ProductionStatus::Completed)
        .build()
        .await?;

    let found = ProductionRepository::new(db)
        .find_active_by_pair(pair.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}

use super::*;

/// Tests bird counts by status.
///
/// Verifies soft-deleted birds and other users' birds are excluded.
///
/// Expected: total 4, available 1, sold 1, dead 1
#[tokio::test]
async fn counts_live_birds_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_bird(db, user.id).await?;
    for status in [BirdStatus::Paired, BirdStatus::Sold, BirdStatus::Dead] {
        factory::bird::BirdFactory::new(db, user.id)
            .status(status)
            .build()
            .await?;
    }
    factory::bird::BirdFactory::new(db, user.id)
        .deleted()
        .build()
        .await?;
    factory::create_bird(db, other.id).await?;

    let repo = DashboardRepository::new(db);

    assert_eq!(repo.count_birds(user.id, None).await?, 4);
    assert_eq!(repo.count_birds(user.id, Some(BirdStatus::Available)).await?, 1);
    assert_eq!(repo.count_birds(user.id, Some(BirdStatus::Sold)).await?, 1);
    assert_eq!(repo.count_birds(user.id, Some(BirdStatus::Dead)).await?, 1);

    Ok(())
}

/// Tests the active pair count.
///
/// Expected: HISTORY pairs are not counted
#[tokio::test]
async fn counts_active_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::helpers::create_active_pair(db, user.id).await?;
    let a = factory::create_bird(db, user.id).await?;
    let b = factory::create_bird(db, user.id).await?;
    factory::pair::PairFactory::new(db, user.id, a.id, b.id)
        .status(PairStatus::History)
        .build()
        .await?;

    let count = DashboardRepository::new(db).count_active_pairs(user.id).await?;

    assert_eq!(count, 1);

    Ok(())
}

use super::*;

/// Tests which eggs count as incubating.
///
/// Verifies only PENDING and FERTILE eggs of active productions under the user's active
/// pairs are counted.
///
/// Expected: 2 (one PENDING, one FERTILE under the active pair)
#[tokio::test]
async fn counts_pending_and_fertile_eggs_of_active_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, _, production) = factory::helpers::create_active_pair(db, user.id).await?;

    factory::create_egg(db, production.id, 1).await?;
    for (order, status) in [
        (2, EggStatus::Fertile),
        (3, EggStatus::Infertile),
        (4, EggStatus::Hatched),
    ] {
        factory::egg::EggFactory::new(db, production.id)
            .egg_order(order)
            .status(status)
            .build()
            .await?;
    }

    let count = DashboardRepository::new(db)
        .count_incubating_eggs(user.id)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests eggs left under a disbanded pair.
///
/// Expected: a PENDING egg under a HISTORY pair is not counted
#[tokio::test]
async fn excludes_eggs_of_disbanded_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let a = factory::create_bird(db, user.id).await?;
    let b = factory::create_bird(db, user.id).await?;
    let pair = factory::pair::PairFactory::new(db, user.id, a.id, b.id)
        .status(PairStatus::History)
        .build()
        .await?;
    let production = factory::create_production(db, pair.id).await?;
    factory::create_egg(db, production.id, 1).await?;

    let count = DashboardRepository::new(db)
        .count_incubating_eggs(user.id)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that other users' eggs are not counted.
///
/// Expected: 0 for a user without pairs
#[tokio::test]
async fn excludes_other_users_eggs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let (_, _, _, production) = factory::helpers::create_active_pair(db, owner.id).await?;
    factory::create_egg(db, production.id, 1).await?;

    let count = DashboardRepository::new(db)
        .count_incubating_eggs(stranger.id)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

use super::*;

async fn status_of(db: &sea_orm::DatabaseConnection, id: i32) -> Result<BirdStatus, DbErr> {
    let bird = entity::prelude::Bird::find_by_id(id).one(db).await?;

    Ok(bird.unwrap().status)
}

/// Tests claiming two available birds.
///
/// Expected: 2 rows affected and both birds PAIRED
#[tokio::test]
async fn claims_two_available_birds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sire = factory::create_bird(db, user.id).await?;
    let dam = factory::create_bird(db, user.id).await?;

    let claimed = BirdRepository::new(db)
        .claim_for_pairing(user.id, sire.id, dam.id)
        .await?;

    assert_eq!(claimed, 2);
    assert_eq!(status_of(db, sire.id).await?, BirdStatus::Paired);
    assert_eq!(status_of(db, dam.id).await?, BirdStatus::Paired);

    Ok(())
}

/// Tests claiming when one bird is already paired.
///
/// Expected: only 1 row affected
#[tokio::test]
async fn claims_fewer_when_bird_is_paired() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sire = factory::bird::BirdFactory::new(db, user.id)
        .status(BirdStatus::Paired)
        .build()
        .await?;
    let dam = factory::create_bird(db, user.id).await?;

    let claimed = BirdRepository::new(db)
        .claim_for_pairing(user.id, sire.id, dam.id)
        .await?;

    assert_eq!(claimed, 1);

    Ok(())
}

/// Tests claiming the same bird as sire and dam.
///
/// Expected: only 1 row affected
#[tokio::test]
async fn claims_one_row_for_same_bird() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let bird = factory::create_bird(db, user.id).await?;

    let claimed = BirdRepository::new(db)
        .claim_for_pairing(user.id, bird.id, bird.id)
        .await?;

    assert_eq!(claimed, 1);

    Ok(())
}

/// Tests claiming another user's or soft-deleted birds.
///
/// Expected: 0 rows affected and statuses unchanged
#[tokio::test]
async fn skips_foreign_and_deleted_birds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let foreign = factory::create_bird(db, other.id).await?;
    let deleted = factory::bird::BirdFactory::new(db, user.id)
        .deleted()
        .build()
        .await?;

    let claimed = BirdRepository::new(db)
        .claim_for_pairing(user.id, foreign.id, deleted.id)
        .await?;

    assert_eq!(claimed, 0);
    assert_eq!(status_of(db, foreign.id).await?, BirdStatus::Available);
    assert_eq!(status_of(db, deleted.id).await?, BirdStatus::Available);

    Ok(())
}

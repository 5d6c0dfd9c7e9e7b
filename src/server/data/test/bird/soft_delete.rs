use super::*;

/// Tests soft-deleting a bird.
///
/// Expected: Ok(true) and the row keeps existing with `deleted_at` stamped
#[tokio::test]
async fn stamps_deleted_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let bird = factory::create_bird(db, user.id).await?;

    let deleted = BirdRepository::new(db)
        .soft_delete(bird.id, Utc::now())
        .await?;

    assert!(deleted);

    let row = entity::prelude::Bird::find_by_id(bird.id).one(db).await?;
    assert!(row.unwrap().deleted_at.is_some());

    Ok(())
}

/// Tests soft-deleting an already deleted bird.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_already_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let bird = factory::bird::BirdFactory::new(db, user.id)
        .deleted()
        .build()
        .await?;

    let deleted = BirdRepository::new(db)
        .soft_delete(bird.id, Utc::now())
        .await?;

    assert!(!deleted);

    Ok(())
}

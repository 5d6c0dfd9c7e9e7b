use super::*;

/// Tests moving an egg to HATCHED.
///
/// Expected: status HATCHED and hatch timestamp stamped
#[tokio::test]
async fn stamps_hatch_date_when_hatched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, _, production) = factory::helpers::create_active_pair(db, user.id).await?;
    let egg = factory::create_egg(db, production.id, 1).await?;

    let updated = EggRepository::new(db)
        .update_status(egg.id, EggStatus::Hatched, Utc::now())
        .await?;

    assert_eq!(updated.status, EggStatus::Hatched);
    assert!(updated.hatch_date.is_some());

    Ok(())
}

/// Tests moving an egg to a non-hatched status.
///
/// Expected: hatch timestamp stays null
#[tokio::test]
async fn leaves_hatch_date_for_other_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, _, production) = factory::helpers::create_active_pair(db, user.id).await?;
    let egg = factory::create_egg(db, production.id, 1).await?;

    let updated = EggRepository::new(db)
        .update_status(egg.id, EggStatus::Fertile, Utc::now())
        .await?;

    assert_eq!(updated.status, EggStatus::Fertile);
    assert!(updated.hatch_date.is_none());

    Ok(())
}

/// Tests that leaving HATCHED keeps the recorded hatch timestamp.
///
/// Expected: hatch timestamp unchanged after moving to BROKEN
#[tokio::test]
async fn keeps_hatch_date_after_leaving_hatched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, _, production) = factory::helpers::create_active_pair(db, user.id).await?;
    let egg = factory::egg::EggFactory::new(db, production.id)
        .status(EggStatus::Hatched)
        .build()
        .await?;

    let updated = EggRepository::new(db)
        .update_status(egg.id, EggStatus::Broken, Utc::now())
        .await?;

    assert_eq!(updated.status, EggStatus::Broken);
    assert_eq!(updated.hatch_date, egg.hatch_date);

    Ok(())
}

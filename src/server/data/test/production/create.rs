use super::*;

/// Tests inserting a production.
///
/// Expected: Ok with ACTIVE production starting on the given date
#[tokio::test]
async fn creates_active_production() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sire = factory::create_bird(db, user.id).await?;
    let dam = factory::create_bird(db, user.id).await?;
    let pair = factory::create_pair(db, user.id, sire.id, dam.id).await?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let production = ProductionRepository::new(db).create(pair.id, start).await?;

    assert_eq!(production.pair_id, pair.id);
    assert_eq!(production.start_date, start);
    assert_eq!(production.status, ProductionStatus::Active);
    assert!(production.end_date.is_none());

    Ok(())
}

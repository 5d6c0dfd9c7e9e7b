use super::*;

/// Tests inserting an egg.
///
/// Verifies the egg starts PENDING with no hatch timestamp and keeps the given dates.
///
/// Expected: Ok with est hatch 2024-01-26 for an egg laid 2024-01-05
#[tokio::test]
async fn creates_pending_egg() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, _, production) = factory::helpers::create_active_pair(db, user.id).await?;

    let egg = EggRepository::new(db)
        .create(CreateEggParam {
            production_id: production.id,
            egg_order: 1,
            laid_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            est_hatch_date: NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
        })
        .await?;

    assert_eq!(egg.egg_order, 1);
    assert_eq!(egg.est_hatch_date, NaiveDate::from_ymd_opt(2024, 1, 26).unwrap());
    assert_eq!(egg.status, EggStatus::Pending);
    assert!(egg.hatch_date.is_none());

    Ok(())
}

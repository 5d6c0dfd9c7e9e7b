use super::*;

/// Tests inserting a pair row.
///
/// Expected: Ok with ACTIVE pair and no end date
#[tokio::test]
async fn creates_active_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sire = factory::create_bird(db, user.id).await?;
    let dam = factory::create_bird(db, user.id).await?;

    let pair = PairRepository::new(db)
        .create(CreatePairParam {
            user_id: user.id,
            cage_name: "A1".to_string(),
            sire_id: sire.id,
            dam_id: dam.id,
            pairing_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        })
        .await?;

    assert_eq!(pair.user_id, user.id);
    assert_eq!(pair.cage_name, "A1");
    assert_eq!(pair.sire_id, sire.id);
    assert_eq!(pair.dam_id, dam.id);
    assert_eq!(pair.status, PairStatus::Active);
    assert!(pair.end_date.is_none());

    Ok(())
}

use super::*;

/// Tests returning paired birds to AVAILABLE.
///
/// Expected: 2 rows affected and both birds AVAILABLE
#[tokio::test]
async fn releases_paired_birds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (sire, dam, _pair, _production) =
        factory::helpers::create_active_pair(db, user.id).await?;

    let released = BirdRepository::new(db).release([sire.id, dam.id]).await?;

    assert_eq!(released, 2);

    let birds = BirdRepository::new(db).find_by_ids([sire.id, dam.id]).await?;
    assert!(birds.values().all(|b| b.status == BirdStatus::Available));

    Ok(())
}

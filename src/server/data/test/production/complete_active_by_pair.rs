use super::*;

/// Tests completing a pair's active production.
///
/// Expected: 1 row affected, production COMPLETED with end stamped
#[tokio::test]
async fn completes_active_production() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, pair, production) = factory::helpers::create_active_pair(db, user.id).await?;

    let repo = ProductionRepository::new(db);
    let completed = repo.complete_active_by_pair(pair.id, Utc::now()).await?;

    assert_eq!(completed, 1);
    assert!(repo.find_active_by_pair(pair.id).await?.is_none());

    let row = entity::prelude::Production::find_by_id(production.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.status, ProductionStatus::Completed);
    assert!(row.end_date.is_some());

    Ok(())
}

/// Tests that other pairs' productions are left alone.
///
/// Expected: 0 rows affected for a pair without an active production
#[tokio::test]
async fn leaves_other_pairs_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, first, _) = factory::helpers::create_active_pair(db, user.id).await?;
    let sire = factory::create_bird(db, user.id).await?;
    let dam = factory::create_bird(db, user.id).await?;
    let second = factory::create_pair(db, user.id, sire.id, dam.id).await?;

    let repo = ProductionRepository::new(db);

    assert_eq!(repo.complete_active_by_pair(second.id, Utc::now()).await?, 0);
    assert!(repo.find_active_by_pair(first.id).await?.is_some());

    Ok(())
}

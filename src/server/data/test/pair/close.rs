use super::*;

/// Tests closing an active pair.
///
/// Expected: Ok(true), pair HISTORY with end date stamped
#[tokio::test]
async fn moves_pair_to_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, pair, _) = factory::helpers::create_active_pair(db, user.id).await?;

    let repo = PairRepository::new(db);
    let closed = repo.close(pair.id, Utc::now()).await?;

    assert!(closed);

    let pair = repo.find_owned(user.id, pair.id).await?.unwrap();
    assert_eq!(pair.status, PairStatus::History);
    assert!(pair.end_date.is_some());

    Ok(())
}

/// Tests closing a pair twice.
///
/// Expected: second close reports Ok(false)
#[tokio::test]
async fn does_not_close_history_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, pair, _) = factory::helpers::create_active_pair(db, user.id).await?;

    let repo = PairRepository::new(db);

    assert!(repo.close(pair.id, Utc::now()).await?);
    assert!(!repo.close(pair.id, Utc::now()).await?);

    Ok(())
}

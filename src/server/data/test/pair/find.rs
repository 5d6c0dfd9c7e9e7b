use super::*;

/// Tests listing active pairs.
///
/// Expected: only the user's ACTIVE pairs are returned
#[tokio::test]
async fn lists_only_active_pairs_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let (_, _, active, _) = factory::helpers::create_active_pair(db, user.id).await?;

    let a = factory::create_bird(db, user.id).await?;
    let b = factory::create_bird(db, user.id).await?;
    factory::pair::PairFactory::new(db, user.id, a.id, b.id)
        .status(PairStatus::History)
        .build()
        .await?;

    factory::helpers::create_active_pair(db, other.id).await?;

    let pairs = PairRepository::new(db).find_active_by_owner(user.id).await?;

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].id, active.id);

    Ok(())
}

/// Tests owner-scoped pair lookups.
///
/// Expected: HISTORY pairs are found by `find_owned` but not `find_active_owned`;
/// other users' pairs are never found
#[tokio::test]
async fn scopes_lookup_to_owner_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let a = factory::create_bird(db, user.id).await?;
    let b = factory::create_bird(db, user.id).await?;
    let history = factory::pair::PairFactory::new(db, user.id, a.id, b.id)
        .status(PairStatus::History)
        .build()
        .await?;
    let (_, _, foreign, _) = factory::helpers::create_active_pair(db, other.id).await?;

    let repo = PairRepository::new(db);

    assert!(repo.find_owned(user.id, history.id).await?.is_some());
    assert!(repo.find_active_owned(user.id, history.id).await?.is_none());
    assert!(repo.find_owned(user.id, foreign.id).await?.is_none());
    assert!(repo.find_active_owned(other.id, foreign.id).await?.is_some());

    Ok(())
}

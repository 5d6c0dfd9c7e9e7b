use super::*;

/// Tests listing a user's birds.
///
/// Verifies that soft-deleted birds and other users' birds are left out and the result is
/// ordered by ID.
///
/// Expected: Ok with only the user's live birds, ascending
#[tokio::test]
async fn lists_live_birds_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_bird(db, user.id).await?;
    factory::bird::BirdFactory::new(db, user.id)
        .deleted()
        .build()
        .await?;
    let second = factory::create_bird(db, user.id).await?;
    factory::create_bird(db, other.id).await?;

    let birds = BirdRepository::new(db).find_live_by_owner(user.id).await?;

    let ids: Vec<i32> = birds.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests owner-scoped lookups.
///
/// Expected: live lookup misses soft-deleted birds, plain owned lookup finds them, and
/// neither finds another user's bird
#[tokio::test]
async fn scopes_lookup_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let deleted = factory::bird::BirdFactory::new(db, user.id)
        .deleted()
        .build()
        .await?;
    let foreign = factory::create_bird(db, other.id).await?;

    let repo = BirdRepository::new(db);

    assert!(repo.find_live_owned(user.id, deleted.id).await?.is_none());
    assert!(repo.find_owned(user.id, deleted.id).await?.is_some());
    assert!(repo.find_owned(user.id, foreign.id).await?.is_none());
    assert!(repo.find_live_owned(user.id, foreign.id).await?.is_none());

    Ok(())
}

/// Tests resolving birds by ID.
///
/// Verifies that soft-deleted birds still resolve and unknown IDs are skipped.
///
/// Expected: Ok with map containing the live and the deleted bird only
#[tokio::test]
async fn resolves_ids_including_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let live = factory::create_bird(db, user.id).await?;
    let deleted = factory::bird::BirdFactory::new(db, user.id)
        .deleted()
        .build()
        .await?;

    let birds = BirdRepository::new(db)
        .find_by_ids([live.id, deleted.id, live.id, 9999])
        .await?;

    assert_eq!(birds.len(), 2);
    assert!(birds.contains_key(&live.id));
    assert!(birds[&deleted.id].deleted_at.is_some());

    Ok(())
}

/// Tests resolving an empty ID set.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn resolves_empty_id_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let birds = BirdRepository::new(db).find_by_ids(Vec::<i32>::new()).await?;

    assert!(birds.is_empty());

    Ok(())
}

use super::*;

/// Tests applying a partial profile change.
///
/// Verifies that only the provided fields change and the update timestamp is stamped.
///
/// Expected: Ok with new username, unchanged email, stamped last profile update
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("keeper")
        .email("keeper@aviary.org")
        .build()
        .await?;

    let now = Utc::now();
    let updated = UserRepository::new(db)
        .update_profile(
            user.id,
            ProfileChanges {
                username: Some("head_keeper".to_string()),
                email: None,
                profile_pic: None,
                updated_at: now,
                cooldown_cutoff: now - Duration::days(30),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "head_keeper");
    assert_eq!(updated.email, "keeper@aviary.org");
    assert!(updated.profile_pic.is_none());
    assert_eq!(
        updated.last_profile_update.map(|t| t.timestamp()),
        Some(now.timestamp())
    );

    Ok(())
}

/// Tests replacing the profile picture path.
///
/// Expected: Ok with the new path stored
#[tokio::test]
async fn replaces_profile_pic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .profile_pic("/uploads/avatars/old.png")
        .last_profile_update(Utc::now() - Duration::days(40))
        .build()
        .await?;

    let now = Utc::now();
    let updated = UserRepository::new(db)
        .update_profile(
            user.id,
            ProfileChanges {
                username: None,
                email: None,
                profile_pic: Some("/uploads/avatars/new.png".to_string()),
                updated_at: now,
                cooldown_cutoff: now - Duration::days(30),
            },
        )
        .await?
        .unwrap();

    assert_eq!(
        updated.profile_pic.as_deref(),
        Some("/uploads/avatars/new.png")
    );

    Ok(())
}

/// Tests updating a profile whose cooldown has not elapsed.
///
/// Verifies the guard sits in the UPDATE itself, without a prior check by the caller.
///
/// Expected: Ok(None) with the stored username and last update left as they were
#[tokio::test]
async fn skips_update_within_cooldown() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let previous = now - Duration::days(5);
    let user = factory::user::UserFactory::new(db)
        .username("keeper")
        .last_profile_update(previous)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            ProfileChanges {
                username: Some("head_keeper".to_string()),
                email: None,
                profile_pic: None,
                updated_at: now,
                cooldown_cutoff: now - Duration::days(30),
            },
        )
        .await?;

    assert!(updated.is_none());

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.username, "keeper");
    assert_eq!(
        stored.last_profile_update.map(|t| t.timestamp()),
        Some(previous.timestamp())
    );

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_user_is_not_updated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let updated = UserRepository::new(db)
        .update_profile(
            999,
            ProfileChanges {
                username: None,
                email: None,
                profile_pic: None,
                updated_at: now,
                cooldown_cutoff: now - Duration::days(30),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

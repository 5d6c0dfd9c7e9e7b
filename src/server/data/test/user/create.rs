use super::*;

/// Tests creating a user.
///
/// Verifies that a new account gets the breeder role and no profile history.
///
/// Expected: Ok with role breeder and null last profile update
#[tokio::test]
async fn creates_breeder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "keeper".to_string(),
            email: "keeper@aviary.org".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.username, "keeper");
    assert_eq!(user.email, "keeper@aviary.org");
    assert_eq!(user.role, UserRole::Breeder);
    assert!(user.profile_pic.is_none());
    assert!(user.last_profile_update.is_none());

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("keeper")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            username: "keeper".to_string(),
            email: "other@aviary.org".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

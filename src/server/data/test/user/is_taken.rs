use super::*;

/// Tests username and email uniqueness checks.
///
/// Expected: taken for existing values, free for unknown ones
#[tokio::test]
async fn detects_taken_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("keeper")
        .email("keeper@aviary.org")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken("keeper", None).await?);
    assert!(repo.email_taken("keeper@aviary.org", None).await?);
    assert!(!repo.username_taken("someone", None).await?);
    assert!(!repo.email_taken("someone@aviary.org", None).await?);

    Ok(())
}

/// Tests that the excluded user does not count as holding a value.
///
/// Expected: a user's own username is not reported as taken when excluded
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("keeper")
        .build()
        .await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.username_taken("keeper", Some(user.id)).await?);
    assert!(repo.username_taken("keeper", Some(other.id)).await?);

    Ok(())
}

use super::*;

/// Tests looking up credentials by username.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("keeper")
        .password_hash("$2b$04$hash")
        .build()
        .await?;

    let credential = UserRepository::new(db).find_credential("keeper").await?;

    let credential = credential.unwrap();
    assert_eq!(credential.user.id, user.id);
    assert_eq!(credential.password_hash, "$2b$04$hash");

    Ok(())
}

/// Tests looking up credentials by email.
///
/// Expected: Ok(Some) for the matching user
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("keeper@aviary.org")
        .build()
        .await?;

    let credential = UserRepository::new(db)
        .find_credential("keeper@aviary.org")
        .await?;

    assert_eq!(credential.map(|c| c.user.id), Some(user.id));

    Ok(())
}

/// Tests an identity that matches nobody.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let credential = UserRepository::new(db).find_credential("nobody").await?;

    assert!(credential.is_none());

    Ok(())
}

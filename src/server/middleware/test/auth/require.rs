use super::*;

/// Tests a request carrying a valid access token.
///
/// Expected: Ok(User) for the token's user
#[tokio::test]
async fn resolves_user_from_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret");

    let user = factory::user::UserFactory::new(db)
        .username("keeper")
        .build()
        .await?;
    let jar = AuthCookies::new(false).set_tokens(CookieJar::new(), &tokens.issue_pair(user.id)?);

    let caller = AuthGuard::new(db, &tokens, &jar).require().await?;

    assert_eq!(caller.id, user.id);
    assert_eq!(caller.username, "keeper");

    Ok(())
}

/// Tests a request without the access token cookie.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret");

    let result = AuthGuard::new(db, &tokens, &CookieJar::new()).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken(_)))
    ));

    Ok(())
}

/// Tests tokens that fail validation.
///
/// Verifies garbage, tokens signed with another secret and expired tokens are all rejected.
///
/// Expected: Err(AuthError::InvalidToken) for each
#[tokio::test]
async fn rejects_invalid_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret");

    let user = factory::create_user(db).await?;

    let forged = TokenService::new("other-secret").issue_pair(user.id)?;
    let expired = TokenService::with_ttls("test-secret", Duration::seconds(-5), Duration::seconds(-5))
        .issue_pair(user.id)?;

    for token in ["garbage".to_string(), forged.access_token, expired.access_token] {
        let jar = CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, token));

        let result = AuthGuard::new(db, &tokens, &jar).require().await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    Ok(())
}

/// Tests a valid token for a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret");

    let jar = AuthCookies::new(false).set_tokens(CookieJar::new(), &tokens.issue_pair(999)?);

    let result = AuthGuard::new(db, &tokens, &jar).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

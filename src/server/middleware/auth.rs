use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::cookie::{AuthCookies, ACCESS_TOKEN_COOKIE},
    model::user::User,
    service::token::TokenService,
};

/// Resolves the caller of a protected endpoint from the access token cookie.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    jar: &'a CookieJar,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, jar: &'a CookieJar) -> Self {
        Self { db, tokens, jar }
    }

    /// Requires a valid access token belonging to an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AppError::AuthErr)` - Cookie missing, token invalid or expired, or user gone
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(token) = AuthCookies::access_token(self.jar) else {
            return Err(AuthError::MissingToken(ACCESS_TOKEN_COOKIE).into());
        };

        let user_id = self.tokens.validate(&token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

//! Registration and login.
//!
//! Passwords are hashed and verified with bcrypt on tokio's blocking pool so a slow hash never
//! stalls the async workers.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterUserParam, User},
    service::token::{TokenPair, TokenService},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `tokens` - Token service used to issue tokens on login
    /// - `bcrypt_cost` - bcrypt work factor for new password hashes
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new breeder account.
    ///
    /// Username and email uniqueness is checked up front; a unique constraint violation from a
    /// concurrent registration is reported the same way.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Username or email already registered
    /// - `Err(AppError::InternalErr)` - Hashing failed
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.username_taken(&param.username, None).await?
            || user_repo.email_taken(&param.email, None).await?
        {
            return Err(already_registered());
        }

        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash,
            })
            .await
            .map_err(map_unique_violation)?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// Unknown identities and wrong passwords fail identically.
    ///
    /// # Returns
    /// - `Ok((User, TokenPair))` - Authenticated user and fresh tokens
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Identity unknown or password wrong
    pub async fn login(&self, param: LoginParam) -> Result<(User, TokenPair), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credential) = user_repo.find_credential(&param.identity).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(param.password, credential.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.tokens.issue_pair(credential.user.id)?;

        Ok((credential.user, tokens))
    }
}

fn already_registered() -> AppError {
    AppError::Conflict("Username or email is already registered".to_string())
}

fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => already_registered(),
        _ => err.into(),
    }
}

async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(InternalError::from)?
        .map_err(InternalError::from)?;

    Ok(hash)
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(InternalError::from)?
        .map_err(InternalError::from)?;

    Ok(matches)
}

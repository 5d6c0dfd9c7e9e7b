//! Access and refresh token issuing.
//!
//! Both token kinds are HS256 JWTs carrying the same `{ user_id, exp }` claims and differ only
//! in lifetime. There is no revocation list: a refresh token stays valid until it expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Lifetime of an access token.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 15;

/// Lifetime of a refresh token.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: i32,
    exp: i64,
}

/// A freshly issued access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Creates a token service signing with `secret` and the default token lifetimes.
    pub fn new(secret: &str) -> Self {
        Self::with_ttls(
            secret,
            Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
            Duration::days(REFRESH_TOKEN_TTL_DAYS),
        )
    }

    /// Creates a token service with custom token lifetimes.
    pub fn with_ttls(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issues a new access and refresh token for a user.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Signed tokens
    /// - `Err(AppError::InternalErr)` - Signing failed
    pub fn issue_pair(&self, user_id: i32) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.sign(user_id, self.access_ttl)?,
            refresh_token: self.sign(user_id, self.refresh_ttl)?,
        })
    }

    /// Validates a token and returns the user ID it was issued to.
    ///
    /// Rejects bad signatures, other algorithms, malformed tokens and expired tokens, with
    /// zero leeway on expiry.
    pub fn validate(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(data.claims.user_id)
    }

    /// Exchanges a valid refresh token for a brand-new token pair for the same user.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let user_id = self.validate(refresh_token)?;

        self.issue_pair(user_id)
    }

    fn sign(&self, user_id: i32, ttl: Duration) -> Result<String, AppError> {
        let claims = Claims {
            user_id,
            exp: (Utc::now() + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| InternalError::TokenSigning(e).into())
    }
}

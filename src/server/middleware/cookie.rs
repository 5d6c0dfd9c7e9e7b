//! Auth cookie management.
//!
//! Access and refresh tokens travel only as HttpOnly cookies. `AuthCookies` centralizes the
//! cookie names and attributes so setting and clearing always agree on them.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::server::service::token::{
    TokenPair, ACCESS_TOKEN_TTL_MINUTES, REFRESH_TOKEN_TTL_DAYS,
};

/// Cookie carrying the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Cookie carrying the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Reads and writes the auth cookie pair.
pub struct AuthCookies {
    secure: bool,
}

impl AuthCookies {
    /// # Arguments
    /// - `secure` - Whether cookies carry the `Secure` attribute
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Adds both token cookies to the jar, replacing any existing ones.
    pub fn set_tokens(&self, jar: CookieJar, tokens: &TokenPair) -> CookieJar {
        jar.add(self.build(
            ACCESS_TOKEN_COOKIE,
            tokens.access_token.clone(),
            time::Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
        ))
        .add(self.build(
            REFRESH_TOKEN_COOKIE,
            tokens.refresh_token.clone(),
            time::Duration::days(REFRESH_TOKEN_TTL_DAYS),
        ))
    }

    /// Expires both token cookies.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
            .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"))
    }

    pub fn access_token(jar: &CookieJar) -> Option<String> {
        jar.get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn refresh_token(jar: &CookieJar) -> Option<String> {
        jar.get(REFRESH_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    fn build(&self, name: &'static str, value: String, max_age: time::Duration) -> Cookie<'static> {
        Cookie::build((name, value))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }
}

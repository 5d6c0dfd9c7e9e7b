use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        cookie::{AuthCookies, ACCESS_TOKEN_COOKIE},
    },
    service::token::TokenService,
};

mod require;

//! Profile updates: username, email and profile picture.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{ProfileChanges, UpdateProfileParam, User, PROFILE_UPDATE_COOLDOWN_DAYS},
    util::{
        parse::{is_valid_email, non_blank},
        upload::{
            image_extension, remove_file_best_effort, resolve_public_path, store_avatar,
            StoredUpload,
        },
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Applies a profile update, at most once per cooldown period.
    ///
    /// Blank fields and values equal to the current ones are ignored. Every successful call
    /// restarts the cooldown, even when nothing changed. The cooldown is checked up front for
    /// the remaining-days message and enforced again by the UPDATE itself. A replaced profile picture is removed
    /// from disk once the update is stored; a newly written picture is removed again if the
    /// update fails.
    ///
    /// # Arguments
    /// - `param` - Requested changes
    /// - `now` - Time of the request, used for the cooldown and the stored timestamp
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::RateLimited)` - Previous update was less than 30 days ago
    /// - `Err(AppError::Conflict)` - Username or email belongs to another user
    /// - `Err(AppError::BadRequest)` - Malformed email or unsupported image type
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn update_profile(
        &self,
        param: UpdateProfileParam,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(param.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(days) = remaining_cooldown_days(user.last_profile_update, now) {
            return Err(AppError::RateLimited(format!(
                "Profile was updated recently, try again in {} days",
                days
            )));
        }

        let username = non_blank(param.username).filter(|name| *name != user.username);
        if let Some(name) = &username {
            if user_repo.username_taken(name, Some(user.id)).await? {
                return Err(AppError::Conflict("Username is already taken".to_string()));
            }
        }

        let email = non_blank(param.email).filter(|email| *email != user.email);
        if let Some(email) = &email {
            if !is_valid_email(email) {
                return Err(AppError::BadRequest("Invalid email address".to_string()));
            }
            if user_repo.email_taken(email, Some(user.id)).await? {
                return Err(AppError::Conflict("Email is already taken".to_string()));
            }
        }

        let extension = param
            .avatar
            .as_ref()
            .map(|avatar| image_extension(&avatar.file_name))
            .transpose()?;

        let stored: Option<StoredUpload> = match (&param.avatar, extension) {
            (Some(avatar), Some(ext)) => Some(
                store_avatar(self.upload_dir, user.id, now.timestamp(), &ext, &avatar.bytes)
                    .await?,
            ),
            _ => None,
        };

        let changes = ProfileChanges {
            username,
            email,
            profile_pic: stored.as_ref().map(|s| s.public_path.clone()),
            updated_at: now,
            cooldown_cutoff: now - Duration::days(PROFILE_UPDATE_COOLDOWN_DAYS),
        };

        let result = match user_repo.update_profile(user.id, changes).await {
            Ok(Some(updated)) => Ok(updated),
            Ok(None) => Err(AppError::RateLimited(
                "Profile was updated recently, try again later".to_string(),
            )),
            Err(err) => Err(map_unique_violation(err)),
        };

        let updated = match result {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(stored) = &stored {
                    remove_file_best_effort(&stored.file_path).await;
                }
                return Err(err);
            }
        };

        if let (Some(stored), Some(previous)) = (&stored, &user.profile_pic) {
            if *previous != stored.public_path {
                if let Some(path) = resolve_public_path(self.upload_dir, previous) {
                    remove_file_best_effort(&path).await;
                }
            }
        }

        Ok(updated)
    }
}

/// Whole days left before another profile update is allowed, or `None` if allowed now.
fn remaining_cooldown_days(
    last_update: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<i64> {
    let elapsed = now - last_update?;

    if elapsed >= Duration::days(PROFILE_UPDATE_COOLDOWN_DAYS) {
        return None;
    }

    Some(PROFILE_UPDATE_COOLDOWN_DAYS - elapsed.num_days())
}

fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Username or email is already taken".to_string())
        }
        _ => err.into(),
    }
}

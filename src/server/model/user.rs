//! User domain models and parameters.
//!
//! Covers the account itself, the credential pair used at login, and the parameter types for
//! registration and profile updates.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        error::AppError,
        util::parse::{is_valid_email, require_text},
    },
};

/// Minimum number of characters a password must have.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Days that must pass between two successful profile updates.
pub const PROFILE_UPDATE_COOLDOWN_DAYS: i64 = 30;

/// Registered account, without its credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    /// Public path of the profile picture, e.g. `/uploads/avatars/user_1_1700000000.png`.
    pub profile_pic: Option<String>,
    /// When the profile was last successfully updated; `None` if never.
    pub last_profile_update: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            profile_pic: self.profile_pic,
            last_profile_update: self.last_profile_update,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: entity.role,
            profile_pic: entity.profile_pic,
            last_profile_update: entity.last_profile_update,
            created_at: entity.created_at,
        }
    }
}

/// A user together with the bcrypt hash their password is verified against.
#[derive(Debug, Clone)]
pub struct UserCredential {
    pub user: User,
    pub password_hash: String,
}

impl UserCredential {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    /// Validates a registration payload.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Trimmed username/email and the raw password
    /// - `Err(AppError::BadRequest)` - A field is blank, the email is malformed, or the
    ///   password is shorter than `MIN_PASSWORD_LENGTH`
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let username = require_text(dto.username, "username")?;
        let email = require_text(dto.email, "email")?;
        let password = dto
            .password
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("password is required".to_string()))?;

        if !is_valid_email(&email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }
}

/// Login input; `identity` is matched against both username and email.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub identity: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let identity = require_text(dto.identity, "email or username")?;
        let password = dto
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest("password is required".to_string()))?;

        Ok(Self { identity, password })
    }
}

/// Row data for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Uploaded profile picture as received from the multipart form.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Requested profile changes; `None` (or blank) fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub user_id: i32,
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<AvatarUpload>,
}

/// Resolved column changes written by a single profile UPDATE.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
    pub updated_at: DateTime<Utc>,
    /// The previous profile update must be at or before this instant for the UPDATE to apply.
    pub cooldown_cutoff: DateTime<Utc>,
}

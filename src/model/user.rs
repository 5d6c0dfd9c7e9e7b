use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[schema(value_type = String, example = "breeder")]
    pub role: UserRole,
    pub profile_pic: Option<String>,
    pub last_profile_update: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login payload; `identity` may be a username or an email.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(alias = "email", alias = "username", default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub message: String,
    pub user: UserDto,
}

/// Multipart form accepted by the profile update endpoint. Every part is optional.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UpdateProfileFormDto {
    pub username: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub profile_pic: Option<Vec<u8>>,
}

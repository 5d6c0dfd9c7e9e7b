use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{BirdStatus, Gender};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BirdDto {
    pub id: i32,
    pub ring_number: String,
    pub species: String,
    pub mutation: String,
    #[schema(value_type = String, example = "M")]
    pub gender: Gender,
    #[schema(value_type = String, example = "AVAILABLE")]
    pub status: BirdStatus,
    pub sire_id: Option<i32>,
    pub dam_id: Option<i32>,
    pub sire: Option<ParentBirdDto>,
    pub dam: Option<ParentBirdDto>,
    pub dob: Option<NaiveDate>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Summary of a parent (or pair member) embedded in another record.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ParentBirdDto {
    pub id: i32,
    pub ring_number: String,
    pub species: String,
    pub mutation: String,
    #[schema(value_type = String, example = "F")]
    pub gender: Gender,
    #[schema(value_type = String, example = "PAIRED")]
    pub status: BirdStatus,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BirdListDto {
    pub data: Vec<BirdDto>,
}

/// Payload for registering a bird. Its status always starts as `AVAILABLE`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateBirdDto {
    pub ring_number: Option<String>,
    pub species: Option<String>,
    pub mutation: Option<String>,
    #[schema(value_type = Option<String>, example = "UNKNOWN")]
    pub gender: Option<Gender>,
    pub sire_id: Option<i32>,
    pub dam_id: Option<i32>,
    /// Date of birth as `YYYY-MM-DD`.
    pub dob: Option<String>,
    pub notes: Option<String>,
}

/// Full replacement of a bird's mutable fields.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateBirdDto {
    pub ring_number: Option<String>,
    pub species: Option<String>,
    pub mutation: Option<String>,
    #[schema(value_type = Option<String>, example = "F")]
    pub gender: Option<Gender>,
    #[schema(value_type = String, example = "SOLD")]
    pub status: BirdStatus,
    pub sire_id: Option<i32>,
    pub dam_id: Option<i32>,
    pub dob: Option<String>,
    pub notes: Option<String>,
}

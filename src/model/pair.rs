use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{EggStatus, PairStatus, ProductionStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::bird::ParentBirdDto;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PairDto {
    pub id: i32,
    pub cage_name: String,
    pub sire_id: i32,
    pub dam_id: i32,
    pub sire: Option<ParentBirdDto>,
    pub dam: Option<ParentBirdDto>,
    pub pairing_date: NaiveDate,
    pub end_date: Option<DateTime<Utc>>,
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: PairStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PairListDto {
    pub data: Vec<PairDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePairDto {
    #[serde(default)]
    pub cage_name: String,
    pub sire_id: i32,
    pub dam_id: i32,
    /// Pairing date as `YYYY-MM-DD`, defaults to today.
    pub pairing_date: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct EggDto {
    pub id: i32,
    pub production_id: i32,
    pub egg_order: i32,
    pub laid_date: NaiveDate,
    pub est_hatch_date: NaiveDate,
    pub hatch_date: Option<DateTime<Utc>>,
    #[schema(value_type = String, example = "PENDING")]
    pub status: EggStatus,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ProductionDto {
    pub id: i32,
    pub pair_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<DateTime<Utc>>,
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: ProductionStatus,
    pub eggs: Vec<EggDto>,
}

/// Active production of a pair, `null` when the pair has none.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ActiveProductionDto {
    pub data: Option<ProductionDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddEggDto {
    /// Laid date as `YYYY-MM-DD`.
    pub laid_date: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateEggStatusDto {
    #[schema(value_type = String, example = "FERTILE")]
    pub status: EggStatus,
}

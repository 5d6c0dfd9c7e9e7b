//! Pair domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::PairStatus;

use crate::{
    model::pair::{CreatePairDto, PairDto},
    server::{error::AppError, model::bird::Bird, util::parse::parse_optional_date},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub id: i32,
    pub user_id: i32,
    pub cage_name: String,
    pub sire_id: i32,
    pub dam_id: i32,
    pub pairing_date: NaiveDate,
    /// Stamped when the pair is disbanded.
    pub end_date: Option<DateTime<Utc>>,
    pub status: PairStatus,
    pub created_at: DateTime<Utc>,
}

impl Pair {
    pub fn from_entity(entity: entity::pair::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            cage_name: entity.cage_name,
            sire_id: entity.sire_id,
            dam_id: entity.dam_id,
            pairing_date: entity.pairing_date,
            end_date: entity.end_date,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// A pair with both members resolved. Members may be soft-deleted but still resolve.
#[derive(Debug, Clone)]
pub struct PairWithBirds {
    pub pair: Pair,
    pub sire: Option<Bird>,
    pub dam: Option<Bird>,
}

impl PairWithBirds {
    pub fn into_dto(self) -> PairDto {
        let pair = self.pair;

        PairDto {
            id: pair.id,
            cage_name: pair.cage_name,
            sire_id: pair.sire_id,
            dam_id: pair.dam_id,
            sire: self.sire.as_ref().map(Bird::to_parent_dto),
            dam: self.dam.as_ref().map(Bird::to_parent_dto),
            pairing_date: pair.pairing_date,
            end_date: pair.end_date,
            status: pair.status,
            created_at: pair.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePairParam {
    pub user_id: i32,
    pub cage_name: String,
    pub sire_id: i32,
    pub dam_id: i32,
    pub pairing_date: NaiveDate,
}

impl CreatePairParam {
    /// Builds the parameters, defaulting the pairing date to `today` when omitted.
    pub fn from_dto(user_id: i32, dto: CreatePairDto, today: NaiveDate) -> Result<Self, AppError> {
        let pairing_date =
            parse_optional_date(dto.pairing_date.as_deref(), "pairing_date")?.unwrap_or(today);

        Ok(Self {
            user_id,
            cage_name: dto.cage_name.trim().to_string(),
            sire_id: dto.sire_id,
            dam_id: dto.dam_id,
            pairing_date,
        })
    }
}

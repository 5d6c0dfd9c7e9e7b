//! Bird domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{BirdStatus, Gender};

use crate::{
    model::bird::{BirdDto, CreateBirdDto, ParentBirdDto, UpdateBirdDto},
    server::{
        error::AppError,
        util::parse::{parse_optional_date, require_text},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub id: i32,
    pub user_id: i32,
    pub ring_number: String,
    pub species: String,
    pub mutation: String,
    pub gender: Gender,
    pub status: BirdStatus,
    pub sire_id: Option<i32>,
    pub dam_id: Option<i32>,
    pub dob: Option<NaiveDate>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Bird {
    pub fn from_entity(entity: entity::bird::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            ring_number: entity.ring_number,
            species: entity.species,
            mutation: entity.mutation,
            gender: entity.gender,
            status: entity.status,
            sire_id: entity.sire_id,
            dam_id: entity.dam_id,
            dob: entity.dob,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    /// Summary used when this bird is embedded as a parent or pair member.
    pub fn to_parent_dto(&self) -> ParentBirdDto {
        ParentBirdDto {
            id: self.id,
            ring_number: self.ring_number.clone(),
            species: self.species.clone(),
            mutation: self.mutation.clone(),
            gender: self.gender,
            status: self.status,
        }
    }
}

/// A bird with its sire and dam resolved, if they still exist.
#[derive(Debug, Clone)]
pub struct BirdWithParents {
    pub bird: Bird,
    pub sire: Option<Bird>,
    pub dam: Option<Bird>,
}

impl BirdWithParents {
    pub fn into_dto(self) -> BirdDto {
        let bird = self.bird;

        BirdDto {
            id: bird.id,
            ring_number: bird.ring_number,
            species: bird.species,
            mutation: bird.mutation,
            gender: bird.gender,
            status: bird.status,
            sire_id: bird.sire_id,
            dam_id: bird.dam_id,
            sire: self.sire.as_ref().map(Bird::to_parent_dto),
            dam: self.dam.as_ref().map(Bird::to_parent_dto),
            dob: bird.dob,
            notes: bird.notes,
            created_at: bird.created_at,
            updated_at: bird.updated_at,
        }
    }
}

/// Validated input for registering a bird. Status is not part of it: new birds are
/// always `AVAILABLE`.
#[derive(Debug, Clone)]
pub struct CreateBirdParam {
    pub user_id: i32,
    pub ring_number: String,
    pub species: String,
    pub mutation: String,
    pub gender: Gender,
    pub sire_id: Option<i32>,
    pub dam_id: Option<i32>,
    pub dob: Option<NaiveDate>,
    pub notes: String,
}

impl CreateBirdParam {
    pub fn from_dto(user_id: i32, dto: CreateBirdDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            ring_number: require_text(dto.ring_number, "ring_number")?,
            species: require_text(dto.species, "species")?,
            mutation: dto.mutation.unwrap_or_default(),
            gender: dto.gender.unwrap_or_default(),
            sire_id: dto.sire_id,
            dam_id: dto.dam_id,
            dob: parse_optional_date(dto.dob.as_deref(), "dob")?,
            notes: dto.notes.unwrap_or_default(),
        })
    }
}

/// Full replacement of a bird's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateBirdParam {
    pub id: i32,
    pub user_id: i32,
    pub ring_number: String,
    pub species: String,
    pub mutation: String,
    pub gender: Gender,
    pub status: BirdStatus,
    pub sire_id: Option<i32>,
    pub dam_id: Option<i32>,
    pub dob: Option<NaiveDate>,
    pub notes: String,
}

impl UpdateBirdParam {
    /// Omitted text fields become empty, omitted links and dob become null and an omitted
    /// gender becomes `UNKNOWN`.
    pub fn from_dto(id: i32, user_id: i32, dto: UpdateBirdDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            user_id,
            ring_number: dto.ring_number.unwrap_or_default(),
            species: dto.species.unwrap_or_default(),
            mutation: dto.mutation.unwrap_or_default(),
            gender: dto.gender.unwrap_or_default(),
            status: dto.status,
            sire_id: dto.sire_id,
            dam_id: dto.dam_id,
            dob: parse_optional_date(dto.dob.as_deref(), "dob")?,
            notes: dto.notes.unwrap_or_default(),
        })
    }
}

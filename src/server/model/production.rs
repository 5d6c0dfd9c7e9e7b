//! Production (breeding cycle) and egg domain models.

use chrono::{DateTime, Days, NaiveDate, Utc};
use entity::sea_orm_active_enums::{EggStatus, ProductionStatus};

use crate::model::pair::{EggDto, ProductionDto};

/// Days between laying and the expected hatch.
pub const INCUBATION_DAYS: u64 = 21;

#[derive(Debug, Clone, PartialEq)]
pub struct Production {
    pub id: i32,
    pub pair_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<DateTime<Utc>>,
    pub status: ProductionStatus,
}

impl Production {
    pub fn from_entity(entity: entity::production::Model) -> Self {
        Self {
            id: entity.id,
            pair_id: entity.pair_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: entity.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Egg {
    pub id: i32,
    pub production_id: i32,
    /// 1-based position within the production at insertion time.
    pub egg_order: i32,
    pub laid_date: NaiveDate,
    pub est_hatch_date: NaiveDate,
    /// Stamped on transition into `HATCHED`.
    pub hatch_date: Option<DateTime<Utc>>,
    pub status: EggStatus,
}

impl Egg {
    pub fn from_entity(entity: entity::egg::Model) -> Self {
        Self {
            id: entity.id,
            production_id: entity.production_id,
            egg_order: entity.egg_order,
            laid_date: entity.laid_date,
            est_hatch_date: entity.est_hatch_date,
            hatch_date: entity.hatch_date,
            status: entity.status,
        }
    }

    /// Expected hatch date for an egg laid on `laid_date`, or `None` past the calendar's end.
    pub fn estimated_hatch(laid_date: NaiveDate) -> Option<NaiveDate> {
        laid_date.checked_add_days(Days::new(INCUBATION_DAYS))
    }

    pub fn into_dto(self) -> EggDto {
        EggDto {
            id: self.id,
            production_id: self.production_id,
            egg_order: self.egg_order,
            laid_date: self.laid_date,
            est_hatch_date: self.est_hatch_date,
            hatch_date: self.hatch_date,
            status: self.status,
        }
    }
}

/// A production with its eggs ordered by ordinal.
#[derive(Debug, Clone)]
pub struct ProductionWithEggs {
    pub production: Production,
    pub eggs: Vec<Egg>,
}

impl ProductionWithEggs {
    pub fn into_dto(self) -> ProductionDto {
        ProductionDto {
            id: self.production.id,
            pair_id: self.production.pair_id,
            start_date: self.production.start_date,
            end_date: self.production.end_date,
            status: self.production.status,
            eggs: self.eggs.into_iter().map(Egg::into_dto).collect(),
        }
    }
}

/// Row data for inserting an egg.
#[derive(Debug, Clone)]
pub struct CreateEggParam {
    pub production_id: i32,
    pub egg_order: i32,
    pub laid_date: NaiveDate,
    pub est_hatch_date: NaiveDate,
}

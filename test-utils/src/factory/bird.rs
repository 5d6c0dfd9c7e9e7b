//! Bird factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{BirdStatus, Gender};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test birds owned by a given user.
///
/// Defaults to an AVAILABLE bird of unknown gender with no parents and a unique ring number.
pub struct BirdFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    ring_number: String,
    species: String,
    mutation: String,
    gender: Gender,
    status: BirdStatus,
    sire_id: Option<i32>,
    dam_id: Option<i32>,
    dob: Option<NaiveDate>,
    notes: String,
    deleted: bool,
}

impl<'a> BirdFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            ring_number: format!("RING-{:05}", id),
            species: "Lovebird".to_string(),
            mutation: String::new(),
            gender: Gender::Unknown,
            status: BirdStatus::Available,
            sire_id: None,
            dam_id: None,
            dob: None,
            notes: String::new(),
            deleted: false,
        }
    }

    pub fn ring_number(mut self, ring_number: impl Into<String>) -> Self {
        self.ring_number = ring_number.into();
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn mutation(mut self, mutation: impl Into<String>) -> Self {
        self.mutation = mutation.into();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn status(mut self, status: BirdStatus) -> Self {
        self.status = status;
        self
    }

    pub fn sire_id(mut self, sire_id: i32) -> Self {
        self.sire_id = Some(sire_id);
        self
    }

    pub fn dam_id(mut self, dam_id: i32) -> Self {
        self.dam_id = Some(dam_id);
        self
    }

    pub fn dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Marks the bird as soft-deleted at creation.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the bird entity into the database.
    pub async fn build(self) -> Result<entity::bird::Model, DbErr> {
        let now = Utc::now();
        entity::bird::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            ring_number: ActiveValue::Set(self.ring_number),
            species: ActiveValue::Set(self.species),
            mutation: ActiveValue::Set(self.mutation),
            gender: ActiveValue::Set(self.gender),
            status: ActiveValue::Set(self.status),
            sire_id: ActiveValue::Set(self.sire_id),
            dam_id: ActiveValue::Set(self.dam_id),
            dob: ActiveValue::Set(self.dob),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an AVAILABLE bird with default values for `user_id`.
pub async fn create_bird(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::bird::Model, DbErr> {
    BirdFactory::new(db, user_id).build().await
}

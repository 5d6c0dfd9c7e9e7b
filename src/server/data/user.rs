//! User data repository.
//!
//! Provides `UserRepository` for account creation, credential lookup at login, uniqueness
//! checks and profile updates.

use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, ProfileChanges, User, UserCredential};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user with the `breeder` role.
    ///
    /// # Arguments
    /// - `param` - Username, email and bcrypt hash of the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations on
    ///   username or email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(UserRole::Breeder),
            profile_pic: ActiveValue::Set(None),
            last_profile_update: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by username or email.
    ///
    /// # Arguments
    /// - `identity` - Value matched against both the username and the email column
    ///
    /// # Returns
    /// - `Ok(Some(UserCredential))` - A user matched
    /// - `Ok(None)` - Neither column matched
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credential(&self, identity: &str) -> Result<Option<UserCredential>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(identity))
                    .add(entity::user::Column::Email.eq(identity)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredential::from_entity))
    }

    /// Checks whether a username is taken, optionally ignoring one user.
    ///
    /// # Arguments
    /// - `username` - Username to look for
    /// - `exclude_user_id` - User allowed to hold the username (the caller on profile updates)
    pub async fn username_taken(
        &self,
        username: &str,
        exclude_user_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));

        if let Some(id) = exclude_user_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an email is taken, optionally ignoring one user.
    pub async fn email_taken(
        &self,
        email: &str,
        exclude_user_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_user_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies profile changes and stamps the last profile update in a single UPDATE.
    ///
    /// The cooldown is part of the UPDATE's WHERE clause: the row only changes if it was
    /// never updated or last updated at or before `changes.cooldown_cutoff`, so two
    /// concurrent updates cannot both pass. Fields left as `None` keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID, or its cooldown has not elapsed
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn update_profile(
        &self,
        user_id: i32,
        changes: ProfileChanges,
    ) -> Result<Option<User>, DbErr> {
        let mut update = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::LastProfileUpdate,
                Expr::value(changes.updated_at),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(changes.updated_at))
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::user::Column::LastProfileUpdate.is_null())
                    .add(entity::user::Column::LastProfileUpdate.lte(changes.cooldown_cutoff)),
            );

        if let Some(username) = changes.username {
            update = update.col_expr(entity::user::Column::Username, Expr::value(username));
        }
        if let Some(email) = changes.email {
            update = update.col_expr(entity::user::Column::Email, Expr::value(email));
        }
        if let Some(profile_pic) = changes.profile_pic {
            update = update.col_expr(entity::user::Column::ProfilePic, Expr::value(profile_pic));
        }

        let result = update.exec(self.db).await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(user_id).await
    }
}

//! User data repository for database operations.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{RegisterUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Uniqueness of nickname and login id is enforced by the schema; callers check for
    /// duplicates first to report a specific error.
    pub async fn create(&self, params: RegisterUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            nickname: ActiveValue::Set(params.nickname),
            login_id: ActiveValue::Set(params.login_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::LoginId.eq(login_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Users among `ids`, keyed by id. Missing ids are absent from the map.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.id, User::from_entity(entity)))
            .collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    pub async fn login_id_taken(&self, login_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::LoginId.eq(login_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn nickname_taken(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets a new nickname.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn update_nickname(&self, id: i32, nickname: String) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.nickname = ActiveValue::Set(nickname);
        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }
}

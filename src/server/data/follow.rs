use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<entity::follow::Model, DbErr> {
        entity::follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            followed_id: ActiveValue::Set(followed_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists(&self, follower_id: i32, followed_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowedId.eq(followed_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes a follow relation.
    ///
    /// # Returns
    /// - `Ok(true)` - The relation existed and was removed
    /// - `Ok(false)` - No such relation
    pub async fn delete(&self, follower_id: i32, followed_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowedId.eq(followed_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of users following `user_id`.
    pub async fn count_followers(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowedId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Number of users `user_id` follows.
    pub async fn count_following(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .count(self.db)
            .await
    }
}

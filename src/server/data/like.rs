//! Post and comment like repositories.
//!
//! Each (target, user) pair is unique; duplicates are rejected by the schema and checked
//! up front by the like service. Post likes move the post's `like_count` in the same
//! transaction as the like row.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, TransactionTrait,
};

use crate::server::data::social::add_like_count;

pub struct SocialLikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocialLikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the like and increments the post's counter.
    pub async fn create(
        &self,
        social_id: i32,
        user_id: i32,
    ) -> Result<entity::social_like::Model, DbErr> {
        let txn = self.db.begin().await?;

        let like = entity::social_like::ActiveModel {
            social_id: ActiveValue::Set(social_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        add_like_count(&txn, social_id, 1).await?;

        txn.commit().await?;

        Ok(like)
    }

    pub async fn find(
        &self,
        social_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::social_like::Model>, DbErr> {
        entity::prelude::SocialLike::find()
            .filter(entity::social_like::Column::SocialId.eq(social_id))
            .filter(entity::social_like::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Removes the like and decrements the post's counter.
    ///
    /// # Returns
    /// - `Ok(true)` - The like existed and the counter was decremented
    /// - `Ok(false)` - No like to remove; the counter is untouched
    pub async fn delete(&self, social_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::SocialLike::delete_many()
            .filter(entity::social_like::Column::SocialId.eq(social_id))
            .filter(entity::social_like::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        let removed = result.rows_affected == 1;
        if removed {
            add_like_count(&txn, social_id, -1).await?;
        }

        txn.commit().await?;

        Ok(removed)
    }

    /// Which of `social_ids` the user has liked.
    pub async fn liked_by(&self, user_id: i32, social_ids: &[i32]) -> Result<HashSet<i32>, DbErr> {
        let liked: Vec<i32> = entity::prelude::SocialLike::find()
            .select_only()
            .column(entity::social_like::Column::SocialId)
            .filter(entity::social_like::Column::UserId.eq(user_id))
            .filter(entity::social_like::Column::SocialId.is_in(social_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(liked.into_iter().collect())
    }
}

pub struct CommentLikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentLikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<entity::comment_like::Model, DbErr> {
        entity::comment_like::ActiveModel {
            comment_id: ActiveValue::Set(comment_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::comment_like::Model>, DbErr> {
        entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .filter(entity::comment_like::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns false when the user had not liked the comment.
    pub async fn delete(&self, comment_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CommentLike::delete_many()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .filter(entity::comment_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Like count per comment and whether `viewer_id` is among the likers.
    pub async fn summarize(
        &self,
        comment_ids: &[i32],
        viewer_id: i32,
    ) -> Result<HashMap<i32, (i32, bool)>, DbErr> {
        let likes = entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.is_in(comment_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut summary: HashMap<i32, (i32, bool)> = HashMap::new();
        for like in likes {
            let entry = summary.entry(like.comment_id).or_insert((0, false));
            entry.0 += 1;
            entry.1 |= like.user_id == viewer_id;
        }

        Ok(summary)
    }
}

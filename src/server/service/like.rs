//! Post and comment likes.
//!
//! A post's `like_count` is adjusted with a relative update in the same transaction as
//! the like insert or delete. Only a delete that removed a row decrements it.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{
        comment::CommentRepository,
        like::{CommentLikeRepository, SocialLikeRepository},
        social::SocialRepository,
    },
    error::{code::ErrorCode, AppError},
};

pub struct LikeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(id)` - Id of the new like
    /// - `Err(AppError::Domain(NotFoundSocialBoard))` - Post missing or deleted
    /// - `Err(AppError::Domain(ExistsLike))` - Already liked
    pub async fn like_social(&self, user_id: i32, social_id: i32) -> Result<i32, AppError> {
        self.require_live_social(social_id).await?;

        let repo = SocialLikeRepository::new(self.db);
        if repo.find(social_id, user_id).await?.is_some() {
            return Err(ErrorCode::ExistsLike.into());
        }

        // A concurrent like of the same pair can still race past the check above.
        let like = repo
            .create(social_id, user_id)
            .await
            .map_err(like_conflict)?;

        Ok(like.id)
    }

    /// # Returns
    /// - `Ok(())` - Like removed
    /// - `Err(AppError::Domain(NotFoundSocialBoard))` - Post missing or deleted
    /// - `Err(AppError::Domain(NotFoundLike))` - Not liked
    pub async fn unlike_social(&self, user_id: i32, social_id: i32) -> Result<(), AppError> {
        self.require_live_social(social_id).await?;

        if !SocialLikeRepository::new(self.db)
            .delete(social_id, user_id)
            .await?
        {
            return Err(ErrorCode::NotFoundLike.into());
        }

        Ok(())
    }

    /// # Returns
    /// - `Ok(id)` - Id of the new comment like
    /// - `Err(AppError::Domain(NotFoundSocialBoard))` - Post missing or deleted
    /// - `Err(AppError::Domain(NotFoundComment))` - Comment missing or deleted
    /// - `Err(AppError::Domain(InvalidCommentForBoard))` - Comment belongs to another post
    /// - `Err(AppError::Domain(ExistsLike))` - Already liked
    pub async fn like_comment(
        &self,
        user_id: i32,
        social_id: i32,
        comment_id: i32,
    ) -> Result<i32, AppError> {
        self.require_comment_on(social_id, comment_id).await?;

        let repo = CommentLikeRepository::new(self.db);
        if repo.find(comment_id, user_id).await?.is_some() {
            return Err(ErrorCode::ExistsLike.into());
        }

        let like = repo
            .create(comment_id, user_id)
            .await
            .map_err(like_conflict)?;

        Ok(like.id)
    }

    /// # Returns
    /// - `Ok(())` - Like removed
    /// - `Err(AppError::Domain(NotFoundLike))` - Not liked
    /// - Same post and comment errors as [`like_comment`](Self::like_comment)
    pub async fn unlike_comment(
        &self,
        user_id: i32,
        social_id: i32,
        comment_id: i32,
    ) -> Result<(), AppError> {
        self.require_comment_on(social_id, comment_id).await?;

        if !CommentLikeRepository::new(self.db)
            .delete(comment_id, user_id)
            .await?
        {
            return Err(ErrorCode::NotFoundLike.into());
        }

        Ok(())
    }

    async fn require_live_social(&self, social_id: i32) -> Result<(), AppError> {
        SocialRepository::new(self.db)
            .find_live_by_id(social_id)
            .await?
            .ok_or(ErrorCode::NotFoundSocialBoard)?;
        Ok(())
    }

    async fn require_comment_on(&self, social_id: i32, comment_id: i32) -> Result<(), AppError> {
        self.require_live_social(social_id).await?;

        let comment = CommentRepository::new(self.db)
            .find_live_by_id(comment_id)
            .await?
            .ok_or(ErrorCode::NotFoundComment)?;
        if comment.social_id != social_id {
            return Err(ErrorCode::InvalidCommentForBoard.into());
        }

        Ok(())
    }
}

fn like_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ErrorCode::ExistsLike.into(),
        _ => err.into(),
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, social::SocialRepository},
    error::{code::ErrorCode, AppError},
    model::comment::CreateCommentParams,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to a live post.
    ///
    /// # Returns
    /// - `Ok(id)` - Id of the new comment
    /// - `Err(AppError::Domain(NotFoundSocialBoard))` - Post missing or deleted
    pub async fn create(&self, params: CreateCommentParams) -> Result<i32, AppError> {
        if SocialRepository::new(self.db)
            .find_live_by_id(params.social_id)
            .await?
            .is_none()
        {
            return Err(ErrorCode::NotFoundSocialBoard.into());
        }

        let comment = CommentRepository::new(self.db).create(params).await?;

        Ok(comment.id)
    }

    /// Soft-deletes a comment written by `user_id` on `social_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::Domain(NotFoundSocialBoard))` - Post missing or deleted
    /// - `Err(AppError::Domain(NotFoundComment))` - Comment missing or deleted
    /// - `Err(AppError::Domain(InvalidCommentForBoard))` - Comment belongs to another post
    /// - `Err(AppError::Domain(UnauthorizedAccessComment))` - Written by someone else
    pub async fn delete(
        &self,
        user_id: i32,
        social_id: i32,
        comment_id: i32,
    ) -> Result<(), AppError> {
        if SocialRepository::new(self.db)
            .find_live_by_id(social_id)
            .await?
            .is_none()
        {
            return Err(ErrorCode::NotFoundSocialBoard.into());
        }

        let repo = CommentRepository::new(self.db);
        let comment = repo
            .find_live_by_id(comment_id)
            .await?
            .ok_or(ErrorCode::NotFoundComment)?;

        if comment.social_id != social_id {
            return Err(ErrorCode::InvalidCommentForBoard.into());
        }
        if comment.user_id != user_id {
            return Err(ErrorCode::UnauthorizedAccessComment.into());
        }

        repo.soft_delete(comment_id).await?;

        Ok(())
    }
}

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::{code::ErrorCode, AppError},
};

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(())` - `follower_id` now follows `followed_id`
    /// - `Err(AppError::Domain(CannotFollowSelf))` - Both ids are equal
    /// - `Err(AppError::Domain(NotFoundUser))` - Target does not exist
    /// - `Err(AppError::Domain(ExistsFollow))` - Already following
    pub async fn follow(&self, follower_id: i32, followed_id: i32) -> Result<(), AppError> {
        if follower_id == followed_id {
            return Err(ErrorCode::CannotFollowSelf.into());
        }
        if !UserRepository::new(self.db).exists(followed_id).await? {
            return Err(ErrorCode::NotFoundUser.into());
        }

        let repo = FollowRepository::new(self.db);
        if repo.exists(follower_id, followed_id).await? {
            return Err(ErrorCode::ExistsFollow.into());
        }

        // A concurrent follow of the same pair can still race past the check above.
        repo.create(follower_id, followed_id)
            .await
            .map_err(follow_conflict)?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(())` - The follow was removed
    /// - `Err(AppError::Domain(NotFoundUser))` - Target does not exist
    /// - `Err(AppError::Domain(NotFoundFollow))` - Not following
    pub async fn unfollow(&self, follower_id: i32, followed_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(followed_id).await? {
            return Err(ErrorCode::NotFoundUser.into());
        }

        if !FollowRepository::new(self.db)
            .delete(follower_id, followed_id)
            .await?
        {
            return Err(ErrorCode::NotFoundFollow.into());
        }

        Ok(())
    }
}

fn follow_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ErrorCode::ExistsFollow.into(),
        _ => err.into(),
    }
}

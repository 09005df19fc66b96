use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, social::SocialRepository, user::UserRepository},
    error::{code::ErrorCode, AppError},
    model::{
        pagination::{CursorPage, PageLimit},
        profile::Profile,
        social::{SocialScope, SocialSummary},
    },
    service::social::SocialService,
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the profile of `profile_user_id` as seen by `viewer_id`.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Nickname, follow counts and number of live posts
    /// - `Err(AppError::Domain(NotFoundUser))` - Unknown user
    pub async fn get_profile(
        &self,
        profile_user_id: i32,
        viewer_id: i32,
    ) -> Result<Profile, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(profile_user_id)
            .await?
            .ok_or(ErrorCode::NotFoundUser)?;

        let follows = FollowRepository::new(self.db);
        let following_count = follows.count_following(user.id).await?;
        let follower_count = follows.count_followers(user.id).await?;
        let total_social_count = SocialRepository::new(self.db)
            .count_live_by_user(user.id)
            .await?;

        Ok(Profile {
            nickname: user.nickname,
            following_count,
            follower_count,
            total_social_count,
            is_me: user.id == viewer_id,
        })
    }

    /// Pages through the posts of `profile_user_id`.
    ///
    /// # Returns
    /// - `Ok(CursorPage)` - The page following `cursor`
    /// - `Err(AppError::Domain(NotFoundUser))` - Unknown user, checked before paging
    pub async fn get_user_socials(
        &self,
        profile_user_id: i32,
        viewer_id: i32,
        cursor: Option<i32>,
        limit: PageLimit,
    ) -> Result<CursorPage<SocialSummary>, AppError> {
        if !UserRepository::new(self.db).exists(profile_user_id).await? {
            return Err(ErrorCode::NotFoundUser.into());
        }

        SocialService::new(self.db)
            .get_feed(viewer_id, SocialScope::Author(profile_user_id), cursor, limit)
            .await
    }
}

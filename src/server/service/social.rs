//! Social posts: creation, detail, deletion and the cursor-paginated feeds.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::SocialCategoryRepository,
        comment::CommentRepository,
        like::{CommentLikeRepository, SocialLikeRepository},
        routine::RoutineRepository,
        social::SocialRepository,
        user::UserRepository,
    },
    error::{code::ErrorCode, AppError},
    model::{
        comment::Comment,
        pagination::{CursorPage, PageLimit},
        social::{
            CreateSocialParams, LikeInfo, Owner, SocialCategory, SocialDetail, SocialScope,
            SocialSummary,
        },
    },
};

pub struct SocialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_categories(&self) -> Result<Vec<SocialCategory>, AppError> {
        let categories = SocialCategoryRepository::new(self.db).get_all().await?;

        Ok(categories
            .into_iter()
            .map(SocialCategory::from_entity)
            .collect())
    }

    /// Creates a post.
    ///
    /// # Returns
    /// - `Ok(id)` - Id of the new post
    /// - `Err(AppError::Domain(NotFoundSocialCategory))` - A category id does not exist
    /// - `Err(AppError::Domain(NotFoundRoutine))` - The attached routine is missing, deleted
    ///   or owned by someone else
    pub async fn create(&self, params: CreateSocialParams) -> Result<i32, AppError> {
        let found = SocialCategoryRepository::new(self.db)
            .find_by_ids(&params.category_ids)
            .await?;
        if found.len() != params.category_ids.len() {
            return Err(ErrorCode::NotFoundSocialCategory.into());
        }

        if let Some(routine_id) = params.routine_id {
            let routine = RoutineRepository::new(self.db)
                .find_live_by_id(routine_id)
                .await?;
            if !routine.is_some_and(|r| r.user_id == params.user_id) {
                return Err(ErrorCode::NotFoundRoutine.into());
            }
        }

        let social = SocialRepository::new(self.db).create(params).await?;

        tracing::debug!(social_id = social.id, user_id = social.user_id, "Created social");

        Ok(social.id)
    }

    /// Loads a post with categories, like state for `viewer_id` and comments.
    ///
    /// # Returns
    /// - `Ok(SocialDetail)` - The post
    /// - `Err(AppError::Domain(NotFoundSocialBoard))` - Missing or deleted
    pub async fn get_detail(
        &self,
        viewer_id: i32,
        social_id: i32,
    ) -> Result<SocialDetail, AppError> {
        let social = SocialRepository::new(self.db)
            .find_live_by_id(social_id)
            .await?
            .ok_or(ErrorCode::NotFoundSocialBoard)?;

        let author = UserRepository::new(self.db)
            .find_by_id(social.user_id)
            .await?
            .ok_or(ErrorCode::NotFoundUser)?;

        let image_urls = SocialRepository::new(self.db)
            .get_image_urls(&[social.id])
            .await?
            .remove(&social.id)
            .unwrap_or_default();

        let categories = SocialCategoryRepository::new(self.db)
            .get_for_social(social.id)
            .await?
            .into_iter()
            .map(SocialCategory::from_entity)
            .collect();

        let is_liked = SocialLikeRepository::new(self.db)
            .find(social.id, viewer_id)
            .await?
            .is_some();

        let comments = self.get_comments(viewer_id, social.id).await?;

        Ok(SocialDetail {
            id: social.id,
            owner: Owner {
                id: author.id,
                nickname: author.nickname,
                anonymous: social.is_anonymous,
            },
            routine_id: social.routine_id,
            content: social.content,
            image_urls,
            categories,
            like_info: LikeInfo {
                like_count: social.like_count,
                is_liked,
            },
            comments,
            created_at: social.created_at,
        })
    }

    async fn get_comments(&self, viewer_id: i32, social_id: i32) -> Result<Vec<Comment>, AppError> {
        let comments = CommentRepository::new(self.db)
            .get_live_for_social(social_id)
            .await?;

        let comment_ids: Vec<i32> = comments.iter().map(|(comment, _)| comment.id).collect();
        let likes = CommentLikeRepository::new(self.db)
            .summarize(&comment_ids, viewer_id)
            .await?;

        comments
            .into_iter()
            .map(|(comment, author)| {
                let author = author.ok_or_else(|| {
                    AppError::InternalError(format!("Comment {} has no author", comment.id))
                })?;
                let (like_count, is_liked) = likes.get(&comment.id).copied().unwrap_or_default();

                Ok(Comment {
                    id: comment.id,
                    owner: Owner {
                        id: author.id,
                        nickname: author.nickname,
                        anonymous: false,
                    },
                    content: comment.content,
                    like_info: LikeInfo {
                        like_count,
                        is_liked,
                    },
                    created_at: comment.created_at,
                })
            })
            .collect()
    }

    /// Soft-deletes a post written by `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::Domain(NotFoundSocialBoard))` - Missing or already deleted
    /// - `Err(AppError::Domain(UnauthorizedAccessSocialBoard))` - Written by someone else
    pub async fn delete(&self, user_id: i32, social_id: i32) -> Result<(), AppError> {
        let repo = SocialRepository::new(self.db);

        let social = repo
            .find_live_by_id(social_id)
            .await?
            .ok_or(ErrorCode::NotFoundSocialBoard)?;
        if social.user_id != user_id {
            return Err(ErrorCode::UnauthorizedAccessSocialBoard.into());
        }

        repo.soft_delete(social_id).await?;

        Ok(())
    }

    /// Returns the feed page in `scope` that follows `cursor`, as seen by `viewer_id`.
    pub async fn get_feed(
        &self,
        viewer_id: i32,
        scope: SocialScope,
        cursor: Option<i32>,
        limit: PageLimit,
    ) -> Result<CursorPage<SocialSummary>, AppError> {
        let repo = SocialRepository::new(self.db);
        let page = repo.get_page(&scope, cursor, limit).await?;

        if page.results.is_empty() {
            return Ok(CursorPage::empty());
        }

        let social_ids: Vec<i32> = page.results.iter().map(|social| social.id).collect();
        let mut author_ids: Vec<i32> = page.results.iter().map(|social| social.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors = UserRepository::new(self.db).get_by_ids(&author_ids).await?;
        let mut images = repo.get_image_urls(&social_ids).await?;
        let comment_counts = CommentRepository::new(self.db)
            .count_live_by_social(&social_ids)
            .await?;
        let liked = SocialLikeRepository::new(self.db)
            .liked_by(viewer_id, &social_ids)
            .await?;

        page.try_map(|social| {
            let author = authors.get(&social.user_id).ok_or_else(|| {
                AppError::InternalError(format!("Social {} has no author", social.id))
            })?;

            Ok(SocialSummary {
                id: social.id,
                owner: Owner {
                    id: author.id,
                    nickname: author.nickname.clone(),
                    anonymous: social.is_anonymous,
                },
                content: social.content,
                image_urls: images.remove(&social.id).unwrap_or_default(),
                like_info: LikeInfo {
                    like_count: social.like_count,
                    is_liked: liked.contains(&social.id),
                },
                comment_count: comment_counts.get(&social.id).copied().unwrap_or(0),
                created_at: social.created_at,
            })
        })
    }
}

//! Social post domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::social::{
        CreateSocialDto, LikeInfoDto, OwnerDto, SocialCategoryDto, SocialDetailDto, SocialDto,
    },
    server::{
        error::{code::ErrorCode, AppError},
        model::comment::Comment,
        util::{date::format_display, validate},
    },
};

/// Nickname shown in place of the author of an anonymous post.
pub const ANONYMOUS_NICKNAME: &str = "anonymous";

/// Which posts a feed query covers. Soft-deleted posts are always excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialScope {
    /// Every post.
    All,
    /// Posts tagged with at least one of the categories.
    Categories(Vec<i32>),
    /// Posts written by one user.
    Author(i32),
}

/// Author of a post or comment as shown to viewers.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub nickname: String,
    pub anonymous: bool,
}

impl Owner {
    pub fn into_dto(self) -> OwnerDto {
        if self.anonymous {
            return OwnerDto {
                owner_id: None,
                nickname: ANONYMOUS_NICKNAME.to_string(),
            };
        }
        OwnerDto {
            owner_id: Some(self.id),
            nickname: self.nickname,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeInfo {
    pub like_count: i32,
    pub is_liked: bool,
}

impl LikeInfo {
    pub fn into_dto(self) -> LikeInfoDto {
        LikeInfoDto {
            like_count: self.like_count,
            is_liked: self.is_liked,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialCategory {
    pub id: i32,
    pub name: String,
}

impl SocialCategory {
    pub fn from_entity(entity: entity::social_category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SocialCategoryDto {
        SocialCategoryDto {
            social_category_id: self.id,
            name: self.name,
        }
    }
}

/// Feed entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialSummary {
    pub id: i32,
    pub owner: Owner,
    pub content: String,
    pub image_urls: Vec<String>,
    pub like_info: LikeInfo,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl SocialSummary {
    pub fn into_dto(self) -> SocialDto {
        SocialDto {
            social_id: self.id,
            owner: self.owner.into_dto(),
            content: self.content,
            image_urls: self.image_urls,
            like_info: self.like_info.into_dto(),
            comment_count: self.comment_count,
            created_at: format_display(self.created_at),
        }
    }
}

/// A single post with its categories and comments.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialDetail {
    pub id: i32,
    pub owner: Owner,
    pub routine_id: Option<i32>,
    pub content: String,
    pub image_urls: Vec<String>,
    pub categories: Vec<SocialCategory>,
    pub like_info: LikeInfo,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl SocialDetail {
    pub fn into_dto(self) -> SocialDetailDto {
        SocialDetailDto {
            social_id: self.id,
            owner: self.owner.into_dto(),
            routine_id: self.routine_id,
            content: self.content,
            image_urls: self.image_urls,
            categories: self
                .categories
                .into_iter()
                .map(SocialCategory::into_dto)
                .collect(),
            like_info: self.like_info.into_dto(),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
            created_at: format_display(self.created_at),
        }
    }
}

/// Validated post creation input.
#[derive(Debug, Clone)]
pub struct CreateSocialParams {
    pub user_id: i32,
    pub content: String,
    pub is_anonymous: bool,
    pub category_ids: Vec<i32>,
    pub image_urls: Vec<String>,
    pub routine_id: Option<i32>,
}

impl CreateSocialParams {
    /// Validates a creation request.
    ///
    /// Category ids are deduplicated, keeping their first occurrence.
    ///
    /// # Returns
    /// - `Ok(CreateSocialParams)` - Valid input
    /// - `Err(AppError::Validation)` - Content is not 1..=500 characters or more than 5
    ///   images were given
    /// - `Err(AppError::Domain(EmptySocialCategoryList))` - No category given
    pub fn from_dto(user_id: i32, dto: CreateSocialDto) -> Result<Self, AppError> {
        validate::char_length("content", &dto.content, 1, 500)?;
        validate::max_items("imageUrls", &dto.image_urls, 5)?;

        if dto.category_ids.is_empty() {
            return Err(ErrorCode::EmptySocialCategoryList.into());
        }

        let mut category_ids = Vec::with_capacity(dto.category_ids.len());
        for id in dto.category_ids {
            if !category_ids.contains(&id) {
                category_ids.push(id);
            }
        }

        Ok(Self {
            user_id,
            content: dto.content,
            is_anonymous: dto.is_anonymous,
            category_ids,
            image_urls: dto.image_urls,
            routine_id: dto.routine_id,
        })
    }
}

use chrono::{DateTime, Utc};

use crate::{
    model::social::{CommentDto, CreateCommentDto},
    server::{
        error::AppError,
        model::social::{LikeInfo, Owner},
        util::{date::format_display, validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub owner: Owner,
    pub content: String,
    pub like_info: LikeInfo,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.id,
            owner: self.owner.into_dto(),
            content: self.content,
            like_info: self.like_info.into_dto(),
            created_at: format_display(self.created_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub social_id: i32,
    pub user_id: i32,
    pub content: String,
}

impl CreateCommentParams {
    /// # Returns
    /// - `Ok(CreateCommentParams)` - Content is 1..=250 characters
    /// - `Err(AppError::Validation)` - Otherwise
    pub fn from_dto(social_id: i32, user_id: i32, dto: CreateCommentDto) -> Result<Self, AppError> {
        validate::char_length("content", &dto.content, 1, 250)?;

        Ok(Self {
            social_id,
            user_id,
            content: dto.content,
        })
    }
}

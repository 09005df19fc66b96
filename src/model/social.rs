use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocialDto {
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
    pub category_ids: Vec<i32>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub routine_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialIdDto {
    pub social_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialCategoryDto {
    pub social_category_id: i32,
    pub name: String,
}

/// Author shown next to a post or comment.
///
/// For anonymous posts the nickname is replaced and the id is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub owner_id: Option<i32>,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeInfoDto {
    pub like_count: i32,
    pub is_liked: bool,
}

/// Feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialDto {
    pub social_id: i32,
    pub owner: OwnerDto,
    pub content: String,
    pub image_urls: Vec<String>,
    pub like_info: LikeInfoDto,
    pub comment_count: u64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialDetailDto {
    pub social_id: i32,
    pub owner: OwnerDto,
    pub routine_id: Option<i32>,
    pub content: String,
    pub image_urls: Vec<String>,
    pub categories: Vec<SocialCategoryDto>,
    pub like_info: LikeInfoDto,
    pub comments: Vec<CommentDto>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub comment_id: i32,
    pub owner: OwnerDto,
    pub content: String,
    pub like_info: LikeInfoDto,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentIdDto {
    pub comment_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLikeIdDto {
    pub social_like_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentLikeIdDto {
    pub comment_like_id: i32,
}

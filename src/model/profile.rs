use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub nickname: String,
    pub following_count: u64,
    pub follower_count: u64,
    pub total_social_count: u64,
    pub is_me: bool,
}

use crate::model::profile::ProfileDto;

/// Public profile of a user as seen by a viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub nickname: String,
    pub following_count: u64,
    pub follower_count: u64,
    pub total_social_count: u64,
    /// Whether the viewer is looking at their own profile.
    pub is_me: bool,
}

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            nickname: self.nickname,
            following_count: self.following_count,
            follower_count: self.follower_count,
            total_social_count: self.total_social_count,
            is_me: self.is_me,
        }
    }
}

use crate::server::data::{
    like::{CommentLikeRepository, SocialLikeRepository},
    social::SocialRepository,
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod comment_like;
mod social_like;

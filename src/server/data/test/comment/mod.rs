use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_live_by_social;
mod get_live_for_social;

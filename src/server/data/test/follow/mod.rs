use crate::server::data::follow::FollowRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod delete;

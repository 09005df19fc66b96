use crate::server::{data::user::UserRepository, model::user::RegisterUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_ids;
mod update_nickname;

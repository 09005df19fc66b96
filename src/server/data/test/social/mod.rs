use crate::server::{
    data::social::SocialRepository,
    model::{
        pagination::PageLimit,
        social::{CreateSocialParams, SocialScope},
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod add_like_count;
mod create;
mod get_page;
mod soft_delete;

fn limit(value: i64) -> PageLimit {
    PageLimit::new(value).unwrap()
}

fn ids(page: &crate::server::model::pagination::CursorPage<entity::social::Model>) -> Vec<i32> {
    page.results.iter().map(|social| social.id).collect()
}

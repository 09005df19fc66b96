use crate::server::{
    data::diary::DiaryRepository,
    model::diary::{CreateDiaryParams, Emotion},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_in_range;

fn entry(user_id: i32, date: NaiveDate, image_urls: Vec<String>) -> CreateDiaryParams {
    CreateDiaryParams {
        user_id,
        date,
        emotion: Emotion::Happy,
        title: Some("Sunny".to_string()),
        memo: None,
        image_urls,
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmotionDto {
    Happy,
    Good,
    Sad,
    Angry,
    Anxious,
    Tired,
    Sick,
    Soso,
    Love,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiaryDto {
    pub date: NaiveDate,
    pub emotion: EmotionDto,
    pub title: Option<String>,
    pub memo: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryIdDto {
    pub diary_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryDto {
    pub diary_id: i32,
    pub date: NaiveDate,
    pub emotion: EmotionDto,
    pub title: Option<String>,
    pub memo: Option<String>,
    pub image_urls: Vec<String>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveConcentrationDto {
    pub date: NaiveDate,
    pub target_count: i32,
    pub setting_count: i32,
    /// Focus time in seconds.
    pub time: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationDto {
    pub id: i32,
    pub date: NaiveDate,
    pub target_count: i32,
    pub setting_count: i32,
    pub time: i32,
    pub percentage: i32,
}

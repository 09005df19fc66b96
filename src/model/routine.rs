use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::plan::{DayOfWeekDto, PlanCategoryDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineDto {
    pub title: String,
    pub category: Option<PlanCategoryDto>,
    /// `#RRGGBB`
    pub color: Option<String>,
    /// `HH:mm`
    pub time: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub reminder_minutes: Option<i32>,
    pub memo: Option<String>,
    pub days_of_week: Vec<DayOfWeekDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutineIdDto {
    pub routine_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutineForDateDto {
    pub routine_id: i32,
    pub title: String,
    pub category: Option<PlanCategoryDto>,
    pub color: Option<String>,
    pub time: Option<String>,
    pub is_public: bool,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutinesForDateDto {
    pub date: NaiveDate,
    pub routines: Vec<RoutineForDateDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutineCompletionDto {
    pub date: NaiveDate,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicRoutineDto {
    pub routine_id: i32,
    pub title: String,
    pub category: Option<PlanCategoryDto>,
    pub color: Option<String>,
    pub time: Option<String>,
    pub memo: Option<String>,
    pub days_of_week: Vec<DayOfWeekDto>,
    pub shared_count: i32,
}

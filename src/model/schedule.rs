use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::plan::{DayOfWeekDto, PlanCategoryDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleDto {
    pub title: String,
    pub category: Option<PlanCategoryDto>,
    /// `#RRGGBB`
    pub color: Option<String>,
    pub start_date: NaiveDate,
    /// Inclusive; equal to `startDate` for a single-day schedule.
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_all_day: bool,
    /// `HH:mm`, required unless the schedule is all-day.
    pub time: Option<String>,
    /// Weekdays the schedule repeats on within its range; absent means every day.
    pub days_of_week: Option<Vec<DayOfWeekDto>>,
    pub location: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleIdDto {
    pub schedule_id: i32,
}

/// One day a schedule occurs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOccurrenceDto {
    pub date: NaiveDate,
    /// Present once the day has a record.
    pub record_id: Option<i32>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub schedule_id: i32,
    pub title: String,
    pub category: Option<PlanCategoryDto>,
    pub color: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_all_day: bool,
    pub time: Option<String>,
    pub days_of_week: Option<Vec<DayOfWeekDto>>,
    pub location: Option<String>,
    pub memo: Option<String>,
    /// Occurrences inside the requested range, removed days left out.
    pub occurrences: Vec<ScheduleOccurrenceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulesDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedules: Vec<ScheduleDto>,
}

/// A schedule record with the schedule it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecordDto {
    pub record_id: i32,
    pub record_date: NaiveDate,
    pub is_completed: bool,
    pub schedule_id: i32,
    pub title: String,
    pub category: Option<PlanCategoryDto>,
    pub color: Option<String>,
    pub is_all_day: bool,
    pub time: Option<String>,
    pub location: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCompletionDto {
    pub date: NaiveDate,
    pub is_completed: bool,
}

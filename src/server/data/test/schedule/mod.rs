use crate::server::{
    data::schedule::{ScheduleRecordRepository, ScheduleRepository},
    model::{
        plan::{DaysOfWeek, PlanCategory},
        schedule::CreateScheduleParams,
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_live_overlapping;
mod records;
mod truncate;

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

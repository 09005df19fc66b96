use crate::server::{
    data::routine::{RoutineRecordRepository, RoutineRepository},
    model::{
        plan::{DaysOfWeek, PlanCategory},
        routine::CreateRoutineParams,
    },
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_live_for_user;
mod record;

fn params(user_id: i32, title: &str, time: Option<NaiveTime>) -> CreateRoutineParams {
    CreateRoutineParams {
        user_id,
        title: title.to_string(),
        category: Some(PlanCategory::Sleep),
        color: None,
        time,
        is_public: true,
        reminder_minutes: None,
        memo: None,
        days: DaysOfWeek::from_bits(0b0111_1111).unwrap(),
    }
}

use crate::server::{
    data::concentration::ConcentrationRepository, model::concentration::SaveConcentrationParams,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod accumulate;
mod get_in_range;

fn session(
    user_id: i32,
    date: NaiveDate,
    target: i32,
    setting: i32,
    time: i32,
) -> SaveConcentrationParams {
    SaveConcentrationParams {
        user_id,
        date,
        target_count: target,
        setting_count: setting,
        time,
    }
}

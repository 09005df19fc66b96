//! Schedule and schedule record factories.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test schedules.
///
/// ```rust,ignore
/// // Tuesdays in March 2025
/// let schedule = ScheduleFactory::new(&db, user.id)
///     .dates(march(1), march(31))
///     .days(0b10)
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    time: Option<NaiveTime>,
    days_of_week: Option<i16>,
}

impl<'a> ScheduleFactory<'a> {
    /// Defaults to an all-day schedule on today only.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            user_id,
            title: format!("Schedule {}", next_id()),
            start_date: today,
            end_date: today,
            time: None,
            days_of_week: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Inclusive date range.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Makes the schedule timed instead of all-day.
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Weekday bitmask, Monday is bit 0.
    pub fn days(mut self, days_of_week: i16) -> Self {
        self.days_of_week = Some(days_of_week);
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(None),
            color: ActiveValue::Set(None),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            is_all_day: ActiveValue::Set(self.time.is_none()),
            time: ActiveValue::Set(self.time),
            days_of_week: ActiveValue::Set(self.days_of_week),
            location: ActiveValue::Set(None),
            memo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Shorthand for `ScheduleFactory::new(db, user_id).build().await`.
pub async fn create_schedule(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, user_id).build().await
}

/// Inserts a record for `schedule_id` on `date`.
pub async fn create_record(
    db: &DatabaseConnection,
    schedule_id: i32,
    date: NaiveDate,
    is_completed: bool,
) -> Result<entity::schedule_record::Model, DbErr> {
    entity::schedule_record::ActiveModel {
        id: ActiveValue::NotSet,
        schedule_id: ActiveValue::Set(schedule_id),
        record_date: ActiveValue::Set(date),
        is_completed: ActiveValue::Set(is_completed),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

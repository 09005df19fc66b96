//! Schedules, their per-day completion and occurrence removal.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::schedule::{ScheduleRecordRepository, ScheduleRepository},
    error::{code::ErrorCode, AppError},
    model::schedule::{
        CreateScheduleParams, DateRange, Schedule, ScheduleOccurrence, ScheduleRecord,
        ScheduleRecordDetail,
    },
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, AppError> {
        let schedule = ScheduleRepository::new(self.db).create(params).await?;

        Schedule::from_entity(schedule)
    }

    /// Schedules of `user_id` overlapping `range`, each with its occurrences inside it.
    ///
    /// Schedules with every occurrence in the range removed are still listed, with no
    /// occurrences.
    pub async fn get_for_range(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<Vec<(Schedule, Vec<ScheduleOccurrence>)>, AppError> {
        let schedules = ScheduleRepository::new(self.db)
            .get_live_overlapping(user_id, range.start, range.end)
            .await?
            .into_iter()
            .map(Schedule::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let schedule_ids: Vec<i32> = schedules.iter().map(|schedule| schedule.id).collect();
        let mut records: HashMap<i32, HashMap<NaiveDate, ScheduleRecord>> = HashMap::new();
        for record in ScheduleRecordRepository::new(self.db)
            .get_in_range(&schedule_ids, range.start, range.end)
            .await?
        {
            let record = ScheduleRecord::from_entity(record);
            records
                .entry(record.schedule_id)
                .or_default()
                .insert(record.date, record);
        }

        let empty = HashMap::new();
        Ok(schedules
            .into_iter()
            .map(|schedule| {
                let by_date = records.get(&schedule.id).unwrap_or(&empty);
                let occurrences =
                    ScheduleOccurrence::expand(&schedule, range.start, range.end, by_date);
                (schedule, occurrences)
            })
            .collect())
    }

    /// A record of one of the user's schedules, with the schedule.
    ///
    /// # Returns
    /// - `Err(AppError::Domain(NotFoundScheduleRecord))` - Missing, removed, its schedule
    ///   deleted, or owned by someone else
    pub async fn get_record(
        &self,
        user_id: i32,
        record_id: i32,
    ) -> Result<ScheduleRecordDetail, AppError> {
        let (record, schedule) = ScheduleRecordRepository::new(self.db)
            .find_live_with_schedule(record_id)
            .await?
            .filter(|(_, schedule)| schedule.user_id == user_id)
            .ok_or(ErrorCode::NotFoundScheduleRecord)?;

        Ok(ScheduleRecordDetail {
            record: ScheduleRecord::from_entity(record),
            schedule: Schedule::from_entity(schedule)?,
        })
    }

    /// Marks an occurrence as done or not done.
    ///
    /// # Returns
    /// - `Ok(())` - Record written
    /// - `Err(AppError::Domain(NotFoundSchedule))` - Missing, deleted or owned by someone else
    /// - `Err(AppError::Domain(ScheduleInvalidDate))` - The schedule does not occur on
    ///   `date`, or that occurrence was removed
    pub async fn set_completion(
        &self,
        user_id: i32,
        schedule_id: i32,
        date: NaiveDate,
        is_completed: bool,
    ) -> Result<(), AppError> {
        let schedule = self.get_owned(user_id, schedule_id).await?;
        self.require_occurrence(&schedule, date).await?;

        ScheduleRecordRepository::new(self.db)
            .upsert(schedule.id, date, is_completed)
            .await?;

        Ok(())
    }

    /// Removes a single occurrence, leaving the rest of the schedule in place.
    ///
    /// # Returns
    /// - `Err(AppError::Domain(NotFoundSchedule))` - Missing, deleted or owned by someone else
    /// - `Err(AppError::Domain(ScheduleInvalidDate))` - No live occurrence on `date`
    pub async fn delete_occurrence(
        &self,
        user_id: i32,
        schedule_id: i32,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        let schedule = self.get_owned(user_id, schedule_id).await?;
        self.require_occurrence(&schedule, date).await?;

        ScheduleRecordRepository::new(self.db)
            .soft_delete_occurrence(schedule.id, date)
            .await?;

        Ok(())
    }

    /// Deletes a schedule from `from` onwards, or entirely when `from` is absent or is the
    /// schedule's first day.
    ///
    /// Cutting a schedule ends it the day before `from` and drops the uncompleted records
    /// after that; completed records stay as history.
    ///
    /// # Returns
    /// - `Err(AppError::Domain(NotFoundSchedule))` - Missing, deleted or owned by someone else
    /// - `Err(AppError::Domain(ScheduleInvalidDate))` - `from` is outside the schedule's range
    pub async fn delete(
        &self,
        user_id: i32,
        schedule_id: i32,
        from: Option<NaiveDate>,
    ) -> Result<(), AppError> {
        let schedule = self.get_owned(user_id, schedule_id).await?;
        let repo = ScheduleRepository::new(self.db);

        let Some(from) = from.filter(|from| *from != schedule.start_date) else {
            repo.soft_delete(schedule.id).await?;
            return Ok(());
        };

        if !(schedule.start_date..=schedule.end_date).contains(&from) {
            return Err(ErrorCode::ScheduleInvalidDate.into());
        }
        let last_day = from.pred_opt().ok_or(ErrorCode::ScheduleInvalidDate)?;

        repo.truncate(schedule.id, last_day).await?;

        tracing::debug!(schedule_id, %last_day, "Truncated schedule");

        Ok(())
    }

    async fn get_owned(&self, user_id: i32, schedule_id: i32) -> Result<Schedule, AppError> {
        let schedule = ScheduleRepository::new(self.db)
            .find_live_by_id(schedule_id)
            .await?
            .filter(|schedule| schedule.user_id == user_id)
            .ok_or(ErrorCode::NotFoundSchedule)?;

        Schedule::from_entity(schedule)
    }

    async fn require_occurrence(
        &self,
        schedule: &Schedule,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        if !schedule.occurs_on(date) {
            return Err(ErrorCode::ScheduleInvalidDate.into());
        }

        let removed = ScheduleRecordRepository::new(self.db)
            .find_by_date(schedule.id, date)
            .await?
            .is_some_and(|record| record.deleted_at.is_some());
        if removed {
            return Err(ErrorCode::ScheduleInvalidDate.into());
        }

        Ok(())
    }
}

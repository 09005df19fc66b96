//! Schedule domain models.
//!
//! A schedule occurs on every day of `start_date..=end_date` that falls on one of its
//! weekdays, or on every day of the range when it has none.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::{
    model::schedule::{CreateScheduleDto, ScheduleDto, ScheduleOccurrenceDto, ScheduleRecordDto},
    server::{
        error::AppError,
        model::plan::{check_color, format_time, parse_time, DaysOfWeek, PlanCategory},
        util::validate,
    },
};

/// Longest span a single range lookup may cover, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub category: Option<PlanCategory>,
    pub color: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_all_day: bool,
    pub time: Option<NaiveTime>,
    pub days: Option<DaysOfWeek>,
    pub location: Option<String>,
    pub memo: Option<String>,
}

impl Schedule {
    /// # Returns
    /// - `Err(AppError::InternalError)` - The stored weekday mask or category is invalid
    pub fn from_entity(entity: entity::schedule::Model) -> Result<Self, AppError> {
        let days = entity
            .days_of_week
            .map(|bits| {
                DaysOfWeek::from_column(bits).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Schedule {} has invalid weekday mask {bits}",
                        entity.id
                    ))
                })
            })
            .transpose()?;
        let category =
            PlanCategory::from_column(entity.category, &format!("Schedule {}", entity.id))?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            category,
            color: entity.color,
            start_date: entity.start_date,
            end_date: entity.end_date,
            is_all_day: entity.is_all_day,
            time: entity.time,
            days,
            location: entity.location,
            memo: entity.memo,
        })
    }

    /// Whether `date` is in range and on one of the schedule's weekdays. Removed
    /// occurrences are tracked by records, not here.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        (self.start_date..=self.end_date).contains(&date)
            && self.days.map_or(true, |days| days.contains(date.weekday()))
    }

    /// Days the schedule occurs on within `start..=end`, ascending.
    pub fn occurrences_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let from = start.max(self.start_date);
        let to = end.min(self.end_date);
        if from > to {
            return Vec::new();
        }

        from.iter_days()
            .take_while(|date| *date <= to)
            .filter(|date| self.occurs_on(*date))
            .collect()
    }

    pub fn into_dto(self, occurrences: Vec<ScheduleOccurrence>) -> ScheduleDto {
        ScheduleDto {
            schedule_id: self.id,
            title: self.title,
            category: self.category.map(PlanCategory::into_dto),
            color: self.color,
            start_date: self.start_date,
            end_date: self.end_date,
            is_all_day: self.is_all_day,
            time: self.time.map(format_time),
            days_of_week: self.days.map(DaysOfWeek::into_dto),
            location: self.location,
            memo: self.memo,
            occurrences: occurrences
                .into_iter()
                .map(ScheduleOccurrence::into_dto)
                .collect(),
        }
    }
}

/// Per-day state of a schedule, read from its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub id: i32,
    pub schedule_id: i32,
    pub date: NaiveDate,
    pub is_completed: bool,
    pub is_removed: bool,
}

impl ScheduleRecord {
    pub fn from_entity(entity: entity::schedule_record::Model) -> Self {
        Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            date: entity.record_date,
            is_completed: entity.is_completed,
            is_removed: entity.deleted_at.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOccurrence {
    pub date: NaiveDate,
    pub record_id: Option<i32>,
    pub is_completed: bool,
}

impl ScheduleOccurrence {
    /// Expands `schedule` over `start..=end`, dropping removed days and attaching the
    /// completion state of days that have a record. `records` are keyed by date.
    pub fn expand(
        schedule: &Schedule,
        start: NaiveDate,
        end: NaiveDate,
        records: &HashMap<NaiveDate, ScheduleRecord>,
    ) -> Vec<Self> {
        schedule
            .occurrences_between(start, end)
            .into_iter()
            .filter_map(|date| match records.get(&date) {
                Some(record) if record.is_removed => None,
                Some(record) => Some(Self {
                    date,
                    record_id: Some(record.id),
                    is_completed: record.is_completed,
                }),
                None => Some(Self {
                    date,
                    record_id: None,
                    is_completed: false,
                }),
            })
            .collect()
    }

    pub fn into_dto(self) -> ScheduleOccurrenceDto {
        ScheduleOccurrenceDto {
            date: self.date,
            record_id: self.record_id,
            is_completed: self.is_completed,
        }
    }
}

/// A live record joined with its schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRecordDetail {
    pub record: ScheduleRecord,
    pub schedule: Schedule,
}

impl ScheduleRecordDetail {
    pub fn into_dto(self) -> ScheduleRecordDto {
        ScheduleRecordDto {
            record_id: self.record.id,
            record_date: self.record.date,
            is_completed: self.record.is_completed,
            schedule_id: self.schedule.id,
            title: self.schedule.title,
            category: self.schedule.category.map(PlanCategory::into_dto),
            color: self.schedule.color,
            is_all_day: self.schedule.is_all_day,
            time: self.schedule.time.map(format_time),
            location: self.schedule.location,
            memo: self.schedule.memo,
        }
    }
}

/// Inclusive date range of a schedule lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// # Returns
    /// - `Ok(DateRange)` - `start <= end` and the span is at most [`MAX_RANGE_DAYS`]
    /// - `Err(AppError::Validation)` - Otherwise
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::validation("startDate must not be after endDate"));
        }
        if (end - start).num_days() >= MAX_RANGE_DAYS {
            return Err(AppError::validation(format!(
                "A lookup may cover at most {MAX_RANGE_DAYS} days"
            )));
        }
        Ok(Self { start, end })
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleParams {
    pub user_id: i32,
    pub title: String,
    pub category: Option<PlanCategory>,
    pub color: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_all_day: bool,
    pub time: Option<NaiveTime>,
    pub days: Option<DaysOfWeek>,
    pub location: Option<String>,
    pub memo: Option<String>,
}

impl CreateScheduleParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateScheduleParams)` - Title is 1..=20 characters, color is `#RRGGBB`,
    ///   location is at most 20 and memo at most 40 characters, the range is ordered,
    ///   time is given exactly when the schedule is not all-day, a weekday list is
    ///   non-empty and the range contains at least one occurrence
    /// - `Err(AppError::Validation)` - Any of the above failed
    pub fn from_dto(user_id: i32, dto: CreateScheduleDto) -> Result<Self, AppError> {
        validate::char_length("title", &dto.title, 1, 20)?;
        validate::optional_max_length("location", dto.location.as_deref(), 20)?;
        validate::optional_max_length("memo", dto.memo.as_deref(), 40)?;
        check_color(dto.color.as_deref())?;

        if dto.start_date > dto.end_date {
            return Err(AppError::validation("startDate must not be after endDate"));
        }

        let time = parse_time(dto.time.as_deref())?;
        match (dto.is_all_day, time) {
            (true, Some(_)) => {
                return Err(AppError::validation("An all-day schedule has no time"));
            }
            (false, None) => {
                return Err(AppError::validation("time is required unless isAllDay is set"));
            }
            _ => {}
        }

        let days = dto.days_of_week.map(DaysOfWeek::from_dto).transpose()?;
        if let Some(days) = days {
            let mut range = dto.start_date.iter_days().take_while(|d| *d <= dto.end_date);
            if !range.any(|date| days.contains(date.weekday())) {
                return Err(AppError::validation(
                    "daysOfWeek must include a day inside the date range",
                ));
            }
        }

        Ok(Self {
            user_id,
            title: dto.title,
            category: dto.category.map(PlanCategory::from_dto),
            color: dto.color,
            start_date: dto.start_date,
            end_date: dto.end_date,
            is_all_day: dto.is_all_day,
            time,
            days,
            location: dto.location,
            memo: dto.memo,
        })
    }
}

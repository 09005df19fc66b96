//! Routine domain models.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::{
    model::routine::{CreateRoutineDto, PublicRoutineDto, RoutineForDateDto},
    server::{
        error::AppError,
        model::plan::{check_color, format_time, parse_time, DaysOfWeek, PlanCategory},
        util::validate,
    },
};

/// Routine owned by a user, repeating on `days`.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub category: Option<PlanCategory>,
    pub color: Option<String>,
    pub time: Option<NaiveTime>,
    pub is_public: bool,
    pub reminder_minutes: Option<i32>,
    pub memo: Option<String>,
    pub days: DaysOfWeek,
    pub shared_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Routine {
    /// Converts an entity model to a routine domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Routine)` - The converted routine
    /// - `Err(AppError::InternalError)` - The stored weekday mask or category is invalid
    pub fn from_entity(entity: entity::routine::Model) -> Result<Self, AppError> {
        let days = DaysOfWeek::from_column(entity.days_of_week).ok_or_else(|| {
            AppError::InternalError(format!(
                "Routine {} has invalid weekday mask {}",
                entity.id, entity.days_of_week
            ))
        })?;
        let category =
            PlanCategory::from_column(entity.category, &format!("Routine {}", entity.id))?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            category,
            color: entity.color,
            time: entity.time,
            is_public: entity.is_public,
            reminder_minutes: entity.reminder_minutes,
            memo: entity.memo,
            days,
            shared_count: entity.shared_count,
            created_at: entity.created_at,
        })
    }

    /// A routine can be recorded on a date that falls on one of its weekdays and is not
    /// before the day it was created.
    pub fn is_scheduled_on(&self, date: NaiveDate) -> bool {
        self.days.contains(date.weekday()) && date >= self.created_at.date_naive()
    }

    pub fn into_public_dto(self) -> PublicRoutineDto {
        PublicRoutineDto {
            routine_id: self.id,
            title: self.title,
            category: self.category.map(PlanCategory::into_dto),
            color: self.color,
            time: self.time.map(format_time),
            memo: self.memo,
            days_of_week: self.days.into_dto(),
            shared_count: self.shared_count,
        }
    }
}

/// Routine paired with its completion state on a specific date.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineForDate {
    pub routine: Routine,
    pub is_completed: bool,
}

impl RoutineForDate {
    pub fn into_dto(self) -> RoutineForDateDto {
        RoutineForDateDto {
            routine_id: self.routine.id,
            title: self.routine.title,
            category: self.routine.category.map(PlanCategory::into_dto),
            color: self.routine.color,
            time: self.routine.time.map(format_time),
            is_public: self.routine.is_public,
            is_completed: self.is_completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoutineParams {
    pub user_id: i32,
    pub title: String,
    pub category: Option<PlanCategory>,
    pub color: Option<String>,
    pub time: Option<NaiveTime>,
    pub is_public: bool,
    pub reminder_minutes: Option<i32>,
    pub memo: Option<String>,
    pub days: DaysOfWeek,
}

impl CreateRoutineParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateRoutineParams)` - Title is 1..=20 characters, color is `#RRGGBB`,
    ///   time is `HH:mm`, memo is at most 40 characters, reminder is not negative and
    ///   at least one weekday is set
    /// - `Err(AppError::Validation)` - Any of the above failed
    pub fn from_dto(user_id: i32, dto: CreateRoutineDto) -> Result<Self, AppError> {
        validate::char_length("title", &dto.title, 1, 20)?;
        validate::optional_max_length("memo", dto.memo.as_deref(), 40)?;

        check_color(dto.color.as_deref())?;
        if let Some(minutes) = dto.reminder_minutes {
            validate::non_negative("reminderMinutes", minutes)?;
        }

        let time = parse_time(dto.time.as_deref())?;
        let days = DaysOfWeek::from_dto(dto.days_of_week)?;

        Ok(Self {
            user_id,
            title: dto.title,
            category: dto.category.map(PlanCategory::from_dto),
            color: dto.color,
            time,
            is_public: dto.is_public,
            reminder_minutes: dto.reminder_minutes,
            memo: dto.memo,
            days,
        })
    }
}

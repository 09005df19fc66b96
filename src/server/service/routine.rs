//! Routines and their per-date completion.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        routine::{RoutineRecordRepository, RoutineRepository},
        user::UserRepository,
    },
    error::{code::ErrorCode, AppError},
    model::routine::{CreateRoutineParams, Routine, RoutineForDate},
};

pub struct RoutineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoutineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoutineParams) -> Result<Routine, AppError> {
        let routine = RoutineRepository::new(self.db).create(params).await?;

        Routine::from_entity(routine)
    }

    /// Routines of `user_id` scheduled on `date`, with their completion state.
    pub async fn get_for_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<RoutineForDate>, AppError> {
        let routines = RoutineRepository::new(self.db)
            .get_live_for_user(user_id)
            .await?
            .into_iter()
            .map(Routine::from_entity)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|routine| routine.is_scheduled_on(date))
            .collect::<Vec<_>>();

        let routine_ids: Vec<i32> = routines.iter().map(|routine| routine.id).collect();
        let completed = RoutineRecordRepository::new(self.db)
            .completed_on(&routine_ids, date)
            .await?;

        Ok(routines
            .into_iter()
            .map(|routine| RoutineForDate {
                is_completed: completed.contains(&routine.id),
                routine,
            })
            .collect())
    }

    /// Marks a routine as done or not done on `date`.
    ///
    /// # Returns
    /// - `Ok(())` - Record written
    /// - `Err(AppError::Domain(NotFoundRoutine))` - Missing, deleted or owned by someone else
    /// - `Err(AppError::Domain(RoutineInvalidDate))` - `date` is not one of the routine's
    ///   weekdays or is before its creation day
    pub async fn set_completion(
        &self,
        user_id: i32,
        routine_id: i32,
        date: NaiveDate,
        is_completed: bool,
    ) -> Result<(), AppError> {
        let routine = self.get_owned(user_id, routine_id).await?;

        if !routine.is_scheduled_on(date) {
            return Err(ErrorCode::RoutineInvalidDate.into());
        }

        RoutineRecordRepository::new(self.db)
            .upsert(routine.id, date, is_completed)
            .await?;

        Ok(())
    }

    /// Soft-deletes a routine owned by `user_id`.
    pub async fn delete(&self, user_id: i32, routine_id: i32) -> Result<(), AppError> {
        let routine = self.get_owned(user_id, routine_id).await?;

        RoutineRepository::new(self.db)
            .soft_delete(routine.id)
            .await?;

        Ok(())
    }

    /// Public routines of another user, shown on their profile.
    ///
    /// # Returns
    /// - `Err(AppError::Domain(NotFoundUser))` - Unknown user
    pub async fn get_public(&self, owner_id: i32) -> Result<Vec<Routine>, AppError> {
        if !UserRepository::new(self.db).exists(owner_id).await? {
            return Err(ErrorCode::NotFoundUser.into());
        }

        RoutineRepository::new(self.db)
            .get_public_for_user(owner_id)
            .await?
            .into_iter()
            .map(Routine::from_entity)
            .collect()
    }

    async fn get_owned(&self, user_id: i32, routine_id: i32) -> Result<Routine, AppError> {
        let routine = RoutineRepository::new(self.db)
            .find_live_by_id(routine_id)
            .await?
            .filter(|routine| routine.user_id == user_id)
            .ok_or(ErrorCode::NotFoundRoutine)?;

        Routine::from_entity(routine)
    }
}

//! Routine factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Every weekday bit set.
pub const EVERY_DAY: i16 = 0b0111_1111;

/// Builder for test routines.
///
/// ```rust,ignore
/// // Mondays and Wednesdays
/// let routine = RoutineFactory::new(&db, user.id).days(0b101).build().await?;
/// ```
pub struct RoutineFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    is_public: bool,
    days_of_week: i16,
    created_at: DateTime<Utc>,
}

impl<'a> RoutineFactory<'a> {
    /// Defaults to a public routine repeating every day, created now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            title: format!("Routine {}", next_id()),
            is_public: true,
            days_of_week: EVERY_DAY,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Weekday bitmask, Monday is bit 0.
    pub fn days(mut self, days_of_week: i16) -> Self {
        self.days_of_week = days_of_week;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::routine::Model, DbErr> {
        entity::routine::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(None),
            color: ActiveValue::Set(None),
            time: ActiveValue::Set(None),
            is_public: ActiveValue::Set(self.is_public),
            reminder_minutes: ActiveValue::Set(None),
            memo: ActiveValue::Set(None),
            days_of_week: ActiveValue::Set(self.days_of_week),
            shared_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Shorthand for `RoutineFactory::new(db, user_id).build().await`.
pub async fn create_routine(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::routine::Model, DbErr> {
    RoutineFactory::new(db, user_id).build().await
}

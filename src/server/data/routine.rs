use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::routine::CreateRoutineParams;

pub struct RoutineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoutineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateRoutineParams,
    ) -> Result<entity::routine::Model, DbErr> {
        entity::routine::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            category: ActiveValue::Set(params.category.map(|c| c.as_str().to_string())),
            color: ActiveValue::Set(params.color),
            time: ActiveValue::Set(params.time),
            is_public: ActiveValue::Set(params.is_public),
            reminder_minutes: ActiveValue::Set(params.reminder_minutes),
            memo: ActiveValue::Set(params.memo),
            days_of_week: ActiveValue::Set(i16::from(params.days.bits())),
            shared_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_live_by_id(&self, id: i32) -> Result<Option<entity::routine::Model>, DbErr> {
        entity::prelude::Routine::find_by_id(id)
            .filter(entity::routine::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Live routines of a user, ordered by time of day then id. Untimed routines go last.
    pub async fn get_live_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::routine::Model>, DbErr> {
        let mut routines = entity::prelude::Routine::find()
            .filter(entity::routine::Column::UserId.eq(user_id))
            .filter(entity::routine::Column::DeletedAt.is_null())
            .order_by_asc(entity::routine::Column::Id)
            .all(self.db)
            .await?;

        routines.sort_by_key(|routine| (routine.time.is_none(), routine.time));

        Ok(routines)
    }

    pub async fn get_public_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::routine::Model>, DbErr> {
        entity::prelude::Routine::find()
            .filter(entity::routine::Column::UserId.eq(user_id))
            .filter(entity::routine::Column::IsPublic.eq(true))
            .filter(entity::routine::Column::DeletedAt.is_null())
            .order_by_asc(entity::routine::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Routine::update_many()
            .col_expr(entity::routine::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::routine::Column::Id.eq(id))
            .filter(entity::routine::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

pub struct RoutineRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoutineRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or overwrites the completion record of a routine on a date.
    pub async fn upsert(
        &self,
        routine_id: i32,
        date: NaiveDate,
        is_completed: bool,
    ) -> Result<entity::routine_record::Model, DbErr> {
        let existing = entity::prelude::RoutineRecord::find()
            .filter(entity::routine_record::Column::RoutineId.eq(routine_id))
            .filter(entity::routine_record::Column::RecordDate.eq(date))
            .one(self.db)
            .await?;

        match existing {
            Some(record) => {
                let mut active: entity::routine_record::ActiveModel = record.into();
                active.is_completed = ActiveValue::Set(is_completed);
                active.update(self.db).await
            }
            None => {
                entity::routine_record::ActiveModel {
                    routine_id: ActiveValue::Set(routine_id),
                    record_date: ActiveValue::Set(date),
                    is_completed: ActiveValue::Set(is_completed),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Routines among `routine_ids` marked complete on `date`.
    pub async fn completed_on(
        &self,
        routine_ids: &[i32],
        date: NaiveDate,
    ) -> Result<HashSet<i32>, DbErr> {
        let records = entity::prelude::RoutineRecord::find()
            .filter(entity::routine_record::Column::RoutineId.is_in(routine_ids.iter().copied()))
            .filter(entity::routine_record::Column::RecordDate.eq(date))
            .filter(entity::routine_record::Column::IsCompleted.eq(true))
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(|record| record.routine_id).collect())
    }
}

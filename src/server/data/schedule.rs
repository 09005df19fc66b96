//! Schedule and schedule record repositories.
//!
//! A schedule spans `start_date..=end_date`. Its records hold the per-day completion state;
//! a soft-deleted record hides that single occurrence from the schedule.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::schedule::CreateScheduleParams;

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateScheduleParams,
    ) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            category: ActiveValue::Set(params.category.map(|c| c.as_str().to_string())),
            color: ActiveValue::Set(params.color),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            is_all_day: ActiveValue::Set(params.is_all_day),
            time: ActiveValue::Set(params.time),
            days_of_week: ActiveValue::Set(params.days.map(|days| i16::from(days.bits()))),
            location: ActiveValue::Set(params.location),
            memo: ActiveValue::Set(params.memo),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_live_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find_by_id(id)
            .filter(entity::schedule::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Live schedules of a user whose date range overlaps `start..=end`, ordered by start
    /// date then id.
    pub async fn get_live_overlapping(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::UserId.eq(user_id))
            .filter(entity::schedule::Column::DeletedAt.is_null())
            .filter(entity::schedule::Column::StartDate.lte(end))
            .filter(entity::schedule::Column::EndDate.gte(start))
            .order_by_asc(entity::schedule::Column::StartDate)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Schedule::update_many()
            .col_expr(entity::schedule::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::schedule::Column::Id.eq(id))
            .filter(entity::schedule::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Ends the schedule on `last_day` and drops the records after it that were never
    /// completed. Completed records stay as history.
    pub async fn truncate(&self, id: i32, last_day: NaiveDate) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Schedule::update_many()
            .col_expr(entity::schedule::Column::EndDate, Expr::value(last_day))
            .filter(entity::schedule::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ScheduleRecord::delete_many()
            .filter(entity::schedule_record::Column::ScheduleId.eq(id))
            .filter(entity::schedule_record::Column::RecordDate.gt(last_day))
            .filter(entity::schedule_record::Column::IsCompleted.eq(false))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

pub struct ScheduleRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record of a schedule on a date, removed occurrences included.
    pub async fn find_by_date(
        &self,
        schedule_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::schedule_record::Model>, DbErr> {
        entity::prelude::ScheduleRecord::find()
            .filter(entity::schedule_record::Column::ScheduleId.eq(schedule_id))
            .filter(entity::schedule_record::Column::RecordDate.eq(date))
            .one(self.db)
            .await
    }

    /// Records of `schedule_ids` with `start <= record_date <= end`, removed occurrences
    /// included, ordered by date.
    pub async fn get_in_range(
        &self,
        schedule_ids: &[i32],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::schedule_record::Model>, DbErr> {
        entity::prelude::ScheduleRecord::find()
            .filter(
                entity::schedule_record::Column::ScheduleId.is_in(schedule_ids.iter().copied()),
            )
            .filter(entity::schedule_record::Column::RecordDate.gte(start))
            .filter(entity::schedule_record::Column::RecordDate.lte(end))
            .order_by_asc(entity::schedule_record::Column::RecordDate)
            .all(self.db)
            .await
    }

    /// A live record together with its live schedule.
    pub async fn find_live_with_schedule(
        &self,
        id: i32,
    ) -> Result<Option<(entity::schedule_record::Model, entity::schedule::Model)>, DbErr> {
        let found = entity::prelude::ScheduleRecord::find_by_id(id)
            .filter(entity::schedule_record::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::Schedule)
            .filter(entity::schedule::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(found.and_then(|(record, schedule)| schedule.map(|schedule| (record, schedule))))
    }

    /// Creates or overwrites the completion state of a live occurrence.
    pub async fn upsert(
        &self,
        schedule_id: i32,
        date: NaiveDate,
        is_completed: bool,
    ) -> Result<entity::schedule_record::Model, DbErr> {
        match self.find_by_date(schedule_id, date).await? {
            Some(record) => {
                let mut active: entity::schedule_record::ActiveModel = record.into();
                active.is_completed = ActiveValue::Set(is_completed);
                active.update(self.db).await
            }
            None => {
                entity::schedule_record::ActiveModel {
                    schedule_id: ActiveValue::Set(schedule_id),
                    record_date: ActiveValue::Set(date),
                    is_completed: ActiveValue::Set(is_completed),
                    deleted_at: ActiveValue::Set(None),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Removes one occurrence from its schedule by soft-deleting the day's record,
    /// creating the record first when the day had none.
    pub async fn soft_delete_occurrence(
        &self,
        schedule_id: i32,
        date: NaiveDate,
    ) -> Result<(), DbErr> {
        match self.find_by_date(schedule_id, date).await? {
            Some(record) if record.deleted_at.is_none() => {
                let mut active: entity::schedule_record::ActiveModel = record.into();
                active.deleted_at = ActiveValue::Set(Some(Utc::now()));
                active.update(self.db).await?;
            }
            Some(_) => {}
            None => {
                entity::schedule_record::ActiveModel {
                    schedule_id: ActiveValue::Set(schedule_id),
                    record_date: ActiveValue::Set(date),
                    is_completed: ActiveValue::Set(false),
                    deleted_at: ActiveValue::Set(Some(Utc::now())),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }
}

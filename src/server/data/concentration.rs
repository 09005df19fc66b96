use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::concentration::SaveConcentrationParams;

pub struct ConcentrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConcentrationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::concentration::Model>, DbErr> {
        entity::prelude::Concentration::find()
            .filter(entity::concentration::Column::UserId.eq(user_id))
            .filter(entity::concentration::Column::Date.eq(date))
            .one(self.db)
            .await
    }

    /// Records a session for the day.
    ///
    /// The first save of a day inserts the record. Later saves add the reached count and
    /// time to it and replace the set count.
    ///
    /// # Returns
    /// - `Ok(Some(record))` - The stored record after the save
    /// - `Ok(None)` - The day's totals would overflow; nothing was written
    pub async fn accumulate(
        &self,
        params: SaveConcentrationParams,
    ) -> Result<Option<entity::concentration::Model>, DbErr> {
        match self.find_by_date(params.user_id, params.date).await? {
            Some(existing) => {
                let (Some(target_count), Some(time)) = (
                    existing.target_count.checked_add(params.target_count),
                    existing.time.checked_add(params.time),
                ) else {
                    return Ok(None);
                };

                let mut active: entity::concentration::ActiveModel = existing.into();
                active.target_count = ActiveValue::Set(target_count);
                active.setting_count = ActiveValue::Set(params.setting_count);
                active.time = ActiveValue::Set(time);
                active.update(self.db).await.map(Some)
            }
            None => {
                entity::concentration::ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    date: ActiveValue::Set(params.date),
                    target_count: ActiveValue::Set(params.target_count),
                    setting_count: ActiveValue::Set(params.setting_count),
                    time: ActiveValue::Set(params.time),
                    ..Default::default()
                }
                .insert(self.db)
                .await
                .map(Some)
            }
        }
    }

    /// Records with `start <= date < end`, ordered by date.
    pub async fn get_in_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::concentration::Model>, DbErr> {
        entity::prelude::Concentration::find()
            .filter(entity::concentration::Column::UserId.eq(user_id))
            .filter(entity::concentration::Column::Date.gte(start))
            .filter(entity::concentration::Column::Date.lt(end))
            .order_by_asc(entity::concentration::Column::Date)
            .all(self.db)
            .await
    }
}

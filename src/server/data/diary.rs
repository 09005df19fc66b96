use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::diary::CreateDiaryParams;

pub struct DiaryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiaryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a diary and its image URLs in one transaction.
    pub async fn create(&self, params: CreateDiaryParams) -> Result<entity::diary::Model, DbErr> {
        let txn = self.db.begin().await?;

        let diary = entity::diary::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            emotion: ActiveValue::Set(params.emotion.as_str().to_string()),
            title: ActiveValue::Set(params.title),
            memo: ActiveValue::Set(params.memo),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for url in params.image_urls {
            entity::diary_image::ActiveModel {
                diary_id: ActiveValue::Set(diary.id),
                url: ActiveValue::Set(url),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(diary)
    }

    pub async fn find_live_by_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::diary::Model>, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(user_id))
            .filter(entity::diary::Column::Date.eq(date))
            .filter(entity::diary::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    pub async fn find_live_by_id(&self, id: i32) -> Result<Option<entity::diary::Model>, DbErr> {
        entity::prelude::Diary::find_by_id(id)
            .filter(entity::diary::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Live diaries with `start <= date < end`, ordered by date.
    pub async fn get_in_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::diary::Model>, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(user_id))
            .filter(entity::diary::Column::Date.gte(start))
            .filter(entity::diary::Column::Date.lt(end))
            .filter(entity::diary::Column::DeletedAt.is_null())
            .order_by_asc(entity::diary::Column::Date)
            .all(self.db)
            .await
    }

    /// Image URLs per diary, in insertion order.
    pub async fn get_image_urls(
        &self,
        diary_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        let images = entity::prelude::DiaryImage::find()
            .filter(entity::diary_image::Column::DiaryId.is_in(diary_ids.iter().copied()))
            .order_by_asc(entity::diary_image::Column::Id)
            .all(self.db)
            .await?;

        let mut by_diary: HashMap<i32, Vec<String>> = HashMap::new();
        for image in images {
            by_diary.entry(image.diary_id).or_default().push(image.url);
        }

        Ok(by_diary)
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Diary::update_many()
            .col_expr(entity::diary::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::diary::Column::Id.eq(id))
            .filter(entity::diary::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

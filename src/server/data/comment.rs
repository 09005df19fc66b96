use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::comment::CreateCommentParams;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            social_id: ActiveValue::Set(params.social_id),
            user_id: ActiveValue::Set(params.user_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_live_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id)
            .filter(entity::comment::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Live comments on a post together with their authors, oldest first.
    pub async fn get_live_for_social(
        &self,
        social_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::SocialId.eq(social_id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Live comment count per post. Posts without comments are absent from the map.
    pub async fn count_live_by_social(
        &self,
        social_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        let commented: Vec<i32> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::SocialId)
            .filter(entity::comment::Column::SocialId.is_in(social_ids.iter().copied()))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for social_id in commented {
            *counts.entry(social_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(entity::comment::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

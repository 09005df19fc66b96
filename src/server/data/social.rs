//! Social post repository.
//!
//! Feed listings are paged through [`paginate`] over a scoped `Select`; every scope
//! excludes soft-deleted posts.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select, TransactionTrait,
};

use crate::server::{
    data::pagination::{paginate, SelectSource},
    model::{
        pagination::{CursorPage, PageLimit},
        social::{CreateSocialParams, SocialScope},
    },
};

pub struct SocialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a post together with its category links and image URLs in one transaction.
    pub async fn create(&self, params: CreateSocialParams) -> Result<entity::social::Model, DbErr> {
        let txn = self.db.begin().await?;

        let social = entity::social::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            routine_id: ActiveValue::Set(params.routine_id),
            content: ActiveValue::Set(params.content),
            is_anonymous: ActiveValue::Set(params.is_anonymous),
            like_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for category_id in params.category_ids {
            entity::social_category_link::ActiveModel {
                social_id: ActiveValue::Set(social.id),
                category_id: ActiveValue::Set(category_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        for url in params.image_urls {
            entity::social_image::ActiveModel {
                social_id: ActiveValue::Set(social.id),
                url: ActiveValue::Set(url),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(social)
    }

    /// Finds a post that has not been soft-deleted.
    pub async fn find_live_by_id(&self, id: i32) -> Result<Option<entity::social::Model>, DbErr> {
        entity::prelude::Social::find_by_id(id)
            .filter(entity::social::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Query restricted to `scope`, without ordering or limits.
    fn scoped(scope: &SocialScope) -> Select<entity::social::Entity> {
        let live =
            entity::prelude::Social::find().filter(entity::social::Column::DeletedAt.is_null());

        match scope {
            SocialScope::All => live,
            SocialScope::Author(user_id) => {
                live.filter(entity::social::Column::UserId.eq(*user_id))
            }
            SocialScope::Categories(category_ids) => {
                let tagged = Query::select()
                    .column(entity::social_category_link::Column::SocialId)
                    .from(entity::social_category_link::Entity)
                    .and_where(
                        entity::social_category_link::Column::CategoryId
                            .is_in(category_ids.iter().copied()),
                    )
                    .to_owned();

                live.filter(entity::social::Column::Id.in_subquery(tagged))
            }
        }
    }

    /// Returns the page of posts in `scope` that follows `cursor`.
    pub async fn get_page(
        &self,
        scope: &SocialScope,
        cursor: Option<i32>,
        limit: PageLimit,
    ) -> Result<CursorPage<entity::social::Model>, DbErr> {
        let source = SelectSource::new(self.db, Self::scoped(scope), entity::social::Column::Id);

        let page = paginate(&source, cursor, limit).await?;

        tracing::debug!(
            ?scope,
            ?cursor,
            limit = limit.get(),
            returned = page.results.len(),
            has_more = page.has_more,
            "Paged socials"
        );

        Ok(page)
    }

    /// Number of live posts written by `user_id`.
    pub async fn count_live_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        Self::scoped(&SocialScope::Author(user_id))
            .count(self.db)
            .await
    }

    /// Image URLs per post, in insertion order.
    pub async fn get_image_urls(
        &self,
        social_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        let images = entity::prelude::SocialImage::find()
            .filter(entity::social_image::Column::SocialId.is_in(social_ids.iter().copied()))
            .order_by_asc(entity::social_image::Column::Id)
            .all(self.db)
            .await?;

        let mut by_social: HashMap<i32, Vec<String>> = HashMap::new();
        for image in images {
            by_social.entry(image.social_id).or_default().push(image.url);
        }

        Ok(by_social)
    }

    /// Marks a post as deleted. Returns false when it was missing or already deleted.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Social::update_many()
            .col_expr(entity::social::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::social::Column::Id.eq(id))
            .filter(entity::social::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Adds `delta` to a post's like counter in a single statement.
///
/// Takes any connection so the like repository can run it inside its transaction.
pub async fn add_like_count<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    delta: i32,
) -> Result<(), DbErr> {
    entity::prelude::Social::update_many()
        .col_expr(
            entity::social::Column::LikeCount,
            Expr::col(entity::social::Column::LikeCount).add(delta),
        )
        .filter(entity::social::Column::Id.eq(id))
        .exec(conn)
        .await?;

    Ok(())
}

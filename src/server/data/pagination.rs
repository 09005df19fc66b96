//! Cursor pagination engine.
//!
//! Pages through a collection in strictly descending identifier order. A cursor is the
//! identifier of the last item of the previous page and is only ever compared with `<`,
//! so a cursor pointing at a deleted or never-existing row is still a valid boundary.
//!
//! The engine fetches exactly `limit` rows and then asks the source whether anything
//! older than the last returned row exists. Because ordering is by an immutable,
//! monotonically increasing id, rows inserted while a client is paging always sort
//! ahead of the cursor and never shift later pages.

use std::future::Future;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};

use crate::server::model::pagination::{CursorPage, PageLimit};

/// A collection that can be paged by descending identifier.
pub trait CursorSource {
    type Item;
    type Error;

    /// Identifier used as the cursor for `item`.
    fn cursor_of(item: &Self::Item) -> i32;

    /// Up to `limit` items with an id below `cursor` (or the newest items when `cursor`
    /// is absent), highest id first.
    fn fetch_before(
        &self,
        cursor: Option<i32>,
        limit: PageLimit,
    ) -> impl Future<Output = Result<Vec<Self::Item>, Self::Error>> + Send;

    /// Whether at least one item has an id strictly below `id`.
    fn exists_before(&self, id: i32) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

/// Returns the page following `cursor`.
///
/// # Returns
/// - `Ok(CursorPage)` - Items ordered by descending id; `next_cursor` is the last item's id
///   when older items remain and absent otherwise
/// - `Err(S::Error)` - The source failed, propagated unchanged
pub async fn paginate<S: CursorSource>(
    source: &S,
    cursor: Option<i32>,
    limit: PageLimit,
) -> Result<CursorPage<S::Item>, S::Error> {
    let results = source.fetch_before(cursor, limit).await?;

    let Some(last_id) = results.last().map(S::cursor_of) else {
        return Ok(CursorPage::empty());
    };

    let has_more = source.exists_before(last_id).await?;

    Ok(CursorPage {
        results,
        has_more,
        next_cursor: has_more.then_some(last_id),
    })
}

/// Entity model that exposes its primary key as a cursor.
pub trait CursorItem {
    fn cursor(&self) -> i32;
}

impl CursorItem for entity::social::Model {
    fn cursor(&self) -> i32 {
        self.id
    }
}

/// SeaORM-backed source over a scoped `Select`.
///
/// The scope carries the caller's restrictions (author, category, soft delete); the
/// source only adds the cursor bound, ordering and limit.
pub struct SelectSource<'a, E: EntityTrait> {
    db: &'a DatabaseConnection,
    scope: Select<E>,
    id: E::Column,
}

impl<'a, E: EntityTrait> SelectSource<'a, E> {
    pub fn new(db: &'a DatabaseConnection, scope: Select<E>, id: E::Column) -> Self {
        Self { db, scope, id }
    }
}

impl<E> CursorSource for SelectSource<'_, E>
where
    E: EntityTrait,
    E::Model: CursorItem,
{
    type Item = E::Model;
    type Error = DbErr;

    fn cursor_of(item: &E::Model) -> i32 {
        item.cursor()
    }

    async fn fetch_before(
        &self,
        cursor: Option<i32>,
        limit: PageLimit,
    ) -> Result<Vec<E::Model>, DbErr> {
        let mut query = self.scope.clone();
        if let Some(cursor) = cursor {
            query = query.filter(self.id.lt(cursor));
        }

        query
            .order_by_desc(self.id)
            .limit(limit.get())
            .all(self.db)
            .await
    }

    async fn exists_before(&self, id: i32) -> Result<bool, DbErr> {
        let older = self
            .scope
            .clone()
            .filter(self.id.lt(id))
            .one(self.db)
            .await?;

        Ok(older.is_some())
    }
}

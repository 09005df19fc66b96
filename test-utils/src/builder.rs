use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Add the entity tables a test touches, then call `build()`.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Follow)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
    /// Indexes created after every table.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds the table for `entity`, generated with SQLite syntax.
    ///
    /// Referenced tables should be added before the tables referencing them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a unique index over a column pair, mirroring the migration of the same name.
    pub fn with_unique_pair<E: EntityTrait>(
        mut self,
        name: &str,
        entity: E,
        first: E::Column,
        second: E::Column,
    ) -> Self {
        self.indexes.push(
            Index::create()
                .name(name)
                .table(entity)
                .col(first)
                .col(second)
                .unique()
                .to_owned(),
        );
        self
    }

    /// Users and the follow graph between them.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Follow).with_unique_pair(
            "idx_follow_unique",
            Follow,
            entity::follow::Column::FollowerId,
            entity::follow::Column::FollowedId,
        )
    }

    /// Routines and their per-day completion records.
    pub fn with_routine_tables(self) -> Self {
        self.with_table(Routine).with_table(RoutineRecord)
    }

    /// Everything the social feed reads: users, follows, routines, posts, categories,
    /// images, likes, comments and comment likes.
    pub fn with_social_tables(self) -> Self {
        self.with_user_tables()
            .with_routine_tables()
            .with_table(SocialCategory)
            .with_table(Social)
            .with_table(SocialCategoryLink)
            .with_table(SocialImage)
            .with_table(SocialLike)
            .with_table(Comment)
            .with_table(CommentLike)
            .with_unique_pair(
                "idx_social_like_unique",
                SocialLike,
                entity::social_like::Column::SocialId,
                entity::social_like::Column::UserId,
            )
            .with_unique_pair(
                "idx_comment_like_unique",
                CommentLike,
                entity::comment_like::Column::CommentId,
                entity::comment_like::Column::UserId,
            )
    }

    /// Users plus schedules and their per-day records.
    pub fn with_schedule_tables(self) -> Self {
        self.with_table(User)
            .with_table(Schedule)
            .with_table(ScheduleRecord)
            .with_unique_pair(
                "idx_schedule_record_unique",
                ScheduleRecord,
                entity::schedule_record::Column::ScheduleId,
                entity::schedule_record::Column::RecordDate,
            )
    }

    /// Users plus concentration records.
    pub fn with_concentration_tables(self) -> Self {
        self.with_table(User).with_table(Concentration)
    }

    /// Users plus diaries and their images.
    pub fn with_diary_tables(self) -> Self {
        self.with_table(User)
            .with_table(Diary)
            .with_table(DiaryImage)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with every table created
    /// - `Err(TestError::Database)` - Connection or CREATE TABLE failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;
        context.with_indexes(self.indexes).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

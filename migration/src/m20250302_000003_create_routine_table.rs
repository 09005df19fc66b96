use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Routine::Table)
                    .if_not_exists()
                    .col(pk_auto(Routine::Id))
                    .col(integer(Routine::UserId))
                    .col(string_len(Routine::Title, 100))
                    .col(string_null(Routine::Category))
                    .col(string_null(Routine::Color))
                    .col(time_null(Routine::Time))
                    .col(boolean(Routine::IsPublic))
                    .col(integer_null(Routine::ReminderMinutes))
                    .col(string_null(Routine::Memo))
                    .col(small_integer(Routine::DaysOfWeek))
                    .col(integer(Routine::SharedCount).default(0))
                    .col(
                        timestamp(Routine::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Routine::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_routine_user_id")
                            .from(Routine::Table, Routine::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_routine_user_id")
                    .table(Routine::Table)
                    .col(Routine::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Routine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Routine {
    Table,
    Id,
    UserId,
    Title,
    Category,
    Color,
    Time,
    IsPublic,
    ReminderMinutes,
    Memo,
    DaysOfWeek,
    SharedCount,
    CreatedAt,
    DeletedAt,
}

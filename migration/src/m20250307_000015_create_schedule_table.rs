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
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::UserId))
                    .col(string_len(Schedule::Title, 100))
                    .col(string_null(Schedule::Category))
                    .col(string_null(Schedule::Color))
                    .col(date(Schedule::StartDate))
                    .col(date(Schedule::EndDate))
                    .col(boolean(Schedule::IsAllDay))
                    .col(time_null(Schedule::Time))
                    .col(small_integer_null(Schedule::DaysOfWeek))
                    .col(string_null(Schedule::Location))
                    .col(string_null(Schedule::Memo))
                    .col(
                        timestamp(Schedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Schedule::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_user_id")
                            .from(Schedule::Table, Schedule::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Range lookups filter by owner and overlap with the requested dates
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_user_id_dates")
                    .table(Schedule::Table)
                    .col(Schedule::UserId)
                    .col(Schedule::StartDate)
                    .col(Schedule::EndDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    UserId,
    Title,
    Category,
    Color,
    StartDate,
    EndDate,
    IsAllDay,
    Time,
    DaysOfWeek,
    Location,
    Memo,
    CreatedAt,
    DeletedAt,
}

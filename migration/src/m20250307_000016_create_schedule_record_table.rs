use sea_orm_migration::{prelude::*, schema::*};

use super::m20250307_000015_create_schedule_table::Schedule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduleRecord::Id))
                    .col(integer(ScheduleRecord::ScheduleId))
                    .col(date(ScheduleRecord::RecordDate))
                    .col(boolean(ScheduleRecord::IsCompleted))
                    .col(timestamp_null(ScheduleRecord::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_record_schedule_id")
                            .from(ScheduleRecord::Table, ScheduleRecord::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One record per schedule per day, removed occurrences included
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_record_unique")
                    .table(ScheduleRecord::Table)
                    .col(ScheduleRecord::ScheduleId)
                    .col(ScheduleRecord::RecordDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduleRecord {
    Table,
    Id,
    ScheduleId,
    RecordDate,
    IsCompleted,
    DeletedAt,
}

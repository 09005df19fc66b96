use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000003_create_routine_table::Routine;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoutineRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(RoutineRecord::Id))
                    .col(integer(RoutineRecord::RoutineId))
                    .col(date(RoutineRecord::RecordDate))
                    .col(boolean(RoutineRecord::IsCompleted))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_routine_record_routine_id")
                            .from(RoutineRecord::Table, RoutineRecord::RoutineId)
                            .to(Routine::Table, Routine::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One record per routine per day
        manager
            .create_index(
                Index::create()
                    .name("idx_routine_record_unique")
                    .table(RoutineRecord::Table)
                    .col(RoutineRecord::RoutineId)
                    .col(RoutineRecord::RecordDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoutineRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoutineRecord {
    Table,
    Id,
    RoutineId,
    RecordDate,
    IsCompleted,
}

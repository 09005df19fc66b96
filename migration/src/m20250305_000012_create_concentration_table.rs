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
                    .table(Concentration::Table)
                    .if_not_exists()
                    .col(pk_auto(Concentration::Id))
                    .col(integer(Concentration::UserId))
                    .col(date(Concentration::Date))
                    .col(integer(Concentration::TargetCount))
                    .col(integer(Concentration::SettingCount))
                    .col(integer(Concentration::Time))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_concentration_user_id")
                            .from(Concentration::Table, Concentration::UserId)
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
                    .name("idx_concentration_unique")
                    .table(Concentration::Table)
                    .col(Concentration::UserId)
                    .col(Concentration::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Concentration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Concentration {
    Table,
    Id,
    UserId,
    Date,
    TargetCount,
    SettingCount,
    Time,
}

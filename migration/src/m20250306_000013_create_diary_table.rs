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
                    .table(Diary::Table)
                    .if_not_exists()
                    .col(pk_auto(Diary::Id))
                    .col(integer(Diary::UserId))
                    .col(date(Diary::Date))
                    .col(string(Diary::Emotion))
                    .col(string_null(Diary::Title))
                    .col(text_null(Diary::Memo))
                    .col(
                        timestamp(Diary::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Diary::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_diary_user_id")
                            .from(Diary::Table, Diary::UserId)
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
                    .name("idx_diary_user_id_date")
                    .table(Diary::Table)
                    .col(Diary::UserId)
                    .col(Diary::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Diary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Diary {
    Table,
    Id,
    UserId,
    Date,
    Emotion,
    Title,
    Memo,
    CreatedAt,
    DeletedAt,
}

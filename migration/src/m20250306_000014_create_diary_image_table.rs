use sea_orm_migration::{prelude::*, schema::*};

use super::m20250306_000013_create_diary_table::Diary;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiaryImage::Table)
                    .if_not_exists()
                    .col(pk_auto(DiaryImage::Id))
                    .col(integer(DiaryImage::DiaryId))
                    .col(string(DiaryImage::Url))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_diary_image_diary_id")
                            .from(DiaryImage::Table, DiaryImage::DiaryId)
                            .to(Diary::Table, Diary::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiaryImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiaryImage {
    Table,
    Id,
    DiaryId,
    Url,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20250303_000006_create_social_table::Social;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialImage::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialImage::Id))
                    .col(integer(SocialImage::SocialId))
                    .col(string(SocialImage::Url))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_image_social_id")
                            .from(SocialImage::Table, SocialImage::SocialId)
                            .to(Social::Table, Social::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocialImage {
    Table,
    Id,
    SocialId,
    Url,
}

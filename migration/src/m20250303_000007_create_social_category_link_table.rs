use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250303_000005_create_social_category_table::SocialCategory,
    m20250303_000006_create_social_table::Social,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialCategoryLink::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialCategoryLink::Id))
                    .col(integer(SocialCategoryLink::SocialId))
                    .col(integer(SocialCategoryLink::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_category_link_social_id")
                            .from(SocialCategoryLink::Table, SocialCategoryLink::SocialId)
                            .to(Social::Table, Social::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_category_link_category_id")
                            .from(SocialCategoryLink::Table, SocialCategoryLink::CategoryId)
                            .to(SocialCategory::Table, SocialCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_social_category_link_unique")
                    .table(SocialCategoryLink::Table)
                    .col(SocialCategoryLink::SocialId)
                    .col(SocialCategoryLink::CategoryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialCategoryLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocialCategoryLink {
    Table,
    Id,
    SocialId,
    CategoryId,
}

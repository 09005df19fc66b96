use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250303_000006_create_social_table::Social,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialLike::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialLike::Id))
                    .col(integer(SocialLike::SocialId))
                    .col(integer(SocialLike::UserId))
                    .col(
                        timestamp(SocialLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_like_social_id")
                            .from(SocialLike::Table, SocialLike::SocialId)
                            .to(Social::Table, Social::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_like_user_id")
                            .from(SocialLike::Table, SocialLike::UserId)
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
                    .name("idx_social_like_unique")
                    .table(SocialLike::Table)
                    .col(SocialLike::SocialId)
                    .col(SocialLike::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocialLike {
    Table,
    Id,
    SocialId,
    UserId,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250302_000003_create_routine_table::Routine,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Social::Table)
                    .if_not_exists()
                    .col(pk_auto(Social::Id))
                    .col(integer(Social::UserId))
                    .col(integer_null(Social::RoutineId))
                    .col(text(Social::Content))
                    .col(boolean(Social::IsAnonymous))
                    .col(integer(Social::LikeCount).default(0))
                    .col(
                        timestamp(Social::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Social::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_user_id")
                            .from(Social::Table, Social::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_routine_id")
                            .from(Social::Table, Social::RoutineId)
                            .to(Routine::Table, Routine::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Author feeds scan (user_id, id DESC)
        manager
            .create_index(
                Index::create()
                    .name("idx_social_user_id_id")
                    .table(Social::Table)
                    .col(Social::UserId)
                    .col(Social::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Social::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Social {
    Table,
    Id,
    UserId,
    RoutineId,
    Content,
    IsAnonymous,
    LikeCount,
    CreatedAt,
    DeletedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

/// Categories every post can be tagged with.
const CATEGORIES: [&str; 8] = [
    "Concentration",
    "Sleep",
    "Eating",
    "Exercise",
    "Memory",
    "Impulse",
    "Anxiety",
    "General",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialCategory::Id))
                    .col(string_uniq(SocialCategory::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(SocialCategory::Table)
            .columns([SocialCategory::Name]);
        for name in CATEGORIES {
            insert
                .values([name.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocialCategory {
    Table,
    Id,
    Name,
}

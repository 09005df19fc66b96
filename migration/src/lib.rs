pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_follow_table;
mod m20250302_000003_create_routine_table;
mod m20250302_000004_create_routine_record_table;
mod m20250303_000005_create_social_category_table;
mod m20250303_000006_create_social_table;
mod m20250303_000007_create_social_category_link_table;
mod m20250303_000008_create_social_image_table;
mod m20250303_000009_create_social_like_table;
mod m20250304_000010_create_comment_table;
mod m20250304_000011_create_comment_like_table;
mod m20250305_000012_create_concentration_table;
mod m20250306_000013_create_diary_table;
mod m20250306_000014_create_diary_image_table;
mod m20250307_000015_create_schedule_table;
mod m20250307_000016_create_schedule_record_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_follow_table::Migration),
            Box::new(m20250302_000003_create_routine_table::Migration),
            Box::new(m20250302_000004_create_routine_record_table::Migration),
            Box::new(m20250303_000005_create_social_category_table::Migration),
            Box::new(m20250303_000006_create_social_table::Migration),
            Box::new(m20250303_000007_create_social_category_link_table::Migration),
            Box::new(m20250303_000008_create_social_image_table::Migration),
            Box::new(m20250303_000009_create_social_like_table::Migration),
            Box::new(m20250304_000010_create_comment_table::Migration),
            Box::new(m20250304_000011_create_comment_like_table::Migration),
            Box::new(m20250305_000012_create_concentration_table::Migration),
            Box::new(m20250306_000013_create_diary_table::Migration),
            Box::new(m20250306_000014_create_diary_image_table::Migration),
            Box::new(m20250307_000015_create_schedule_table::Migration),
            Box::new(m20250307_000016_create_schedule_record_table::Migration),
        ]
    }
}

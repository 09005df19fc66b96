//! Social category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a category with a unique name.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::social_category::Model, DbErr> {
    create_category_named(db, format!("Category {}", next_id())).await
}

pub async fn create_category_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::social_category::Model, DbErr> {
    entity::social_category::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}

//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a live comment by `user_id` on `social_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    social_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        id: ActiveValue::NotSet,
        social_id: ActiveValue::Set(social_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

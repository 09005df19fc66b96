//! Follow edge factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a follow edge `follower_id -> followed_id`.
pub async fn create_follow(
    db: &DatabaseConnection,
    follower_id: i32,
    followed_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        id: ActiveValue::NotSet,
        follower_id: ActiveValue::Set(follower_id),
        followed_id: ActiveValue::Set(followed_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

//! User factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test users.
///
/// ```rust,ignore
/// let user = UserFactory::new(&db).nickname("duck").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    nickname: String,
    login_id: String,
}

impl<'a> UserFactory<'a> {
    /// Defaults to nickname `"user{n}"` and login id `"login{n}"` with a unique `n`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nickname: format!("user{}", id),
            login_id: format!("login{}", id),
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn login_id(mut self, login_id: impl Into<String>) -> Self {
        self.login_id = login_id.into();
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            nickname: ActiveValue::Set(self.nickname),
            login_id: ActiveValue::Set(self.login_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

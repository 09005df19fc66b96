//! Social post factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test posts.
///
/// Categories and image URLs are inserted alongside the post.
///
/// ```rust,ignore
/// let post = SocialFactory::new(&db, author.id)
///     .anonymous(true)
///     .images(vec!["https://cdn.example/1.png".to_string()])
///     .build()
///     .await?;
/// ```
pub struct SocialFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    routine_id: Option<i32>,
    content: String,
    is_anonymous: bool,
    like_count: i32,
    categories: Vec<i32>,
    images: Vec<String>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> SocialFactory<'a> {
    /// Defaults to a public post with content `"Post {n}"`, no categories and no images.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            routine_id: None,
            content: format!("Post {}", next_id()),
            is_anonymous: false,
            like_count: 0,
            categories: Vec::new(),
            images: Vec::new(),
            deleted_at: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn routine(mut self, routine_id: i32) -> Self {
        self.routine_id = Some(routine_id);
        self
    }

    pub fn anonymous(mut self, is_anonymous: bool) -> Self {
        self.is_anonymous = is_anonymous;
        self
    }

    pub fn like_count(mut self, like_count: i32) -> Self {
        self.like_count = like_count;
        self
    }

    pub fn categories(mut self, categories: Vec<i32>) -> Self {
        self.categories = categories;
        self
    }

    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Marks the post as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    pub async fn build(self) -> Result<entity::social::Model, DbErr> {
        let social = entity::social::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            routine_id: ActiveValue::Set(self.routine_id),
            content: ActiveValue::Set(self.content),
            is_anonymous: ActiveValue::Set(self.is_anonymous),
            like_count: ActiveValue::Set(self.like_count),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await?;

        for category_id in self.categories {
            entity::social_category_link::ActiveModel {
                id: ActiveValue::NotSet,
                social_id: ActiveValue::Set(social.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        for url in self.images {
            entity::social_image::ActiveModel {
                id: ActiveValue::NotSet,
                social_id: ActiveValue::Set(social.id),
                url: ActiveValue::Set(url),
            }
            .insert(self.db)
            .await?;
        }

        Ok(social)
    }
}

/// Shorthand for `SocialFactory::new(db, user_id).build().await`.
pub async fn create_social(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::social::Model, DbErr> {
    SocialFactory::new(db, user_id).build().await
}

/// Creates `count` posts by `user_id`, returned oldest first.
pub async fn create_socials(
    db: &DatabaseConnection,
    user_id: i32,
    count: usize,
) -> Result<Vec<entity::social::Model>, DbErr> {
    let mut socials = Vec::with_capacity(count);
    for _ in 0..count {
        socials.push(create_social(db, user_id).await?);
    }
    Ok(socials)
}

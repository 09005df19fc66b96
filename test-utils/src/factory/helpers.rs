//! Shared helpers for the factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter, used to keep unique columns unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author, a category and one post by that author tagged with the category.
///
/// # Returns
/// - `Ok((author, category, post))` - The created entities
/// - `Err(DbErr)` - Insert failed
pub async fn create_social_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::social_category::Model,
        entity::social::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let category = crate::factory::social_category::create_category(db).await?;
    let post = crate::factory::social::SocialFactory::new(db, author.id)
        .categories(vec![category.id])
        .build()
        .await?;

    Ok((author, category, post))
}

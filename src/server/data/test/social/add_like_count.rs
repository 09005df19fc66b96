use super::*;
use crate::server::data::social::add_like_count;

/// Tests incrementing and decrementing the like counter.
///
/// Expected: Counter reflects the sum of applied deltas
#[tokio::test]
async fn applies_relative_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let social = factory::social::SocialFactory::new(db, author.id)
        .like_count(2)
        .build()
        .await?;

    add_like_count(db, social.id, 1).await?;
    add_like_count(db, social.id, 1).await?;
    add_like_count(db, social.id, -1).await?;

    let stored = SocialRepository::new(db)
        .find_live_by_id(social.id)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 3);

    Ok(())
}

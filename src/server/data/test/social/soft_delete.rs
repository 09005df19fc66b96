use super::*;

/// Tests soft-deleting a live post.
///
/// Expected: Ok(true), post hidden from lookups but still stored
#[tokio::test]
async fn hides_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;

    let repo = SocialRepository::new(db);
    assert!(repo.soft_delete(social.id).await?);

    assert!(repo.find_live_by_id(social.id).await?.is_none());
    assert_eq!(repo.count_live_by_user(author.id).await?, 0);
    assert!(entity::prelude::Social::find_by_id(social.id)
        .one(db)
        .await?
        .is_some_and(|stored| stored.deleted_at.is_some()));

    Ok(())
}

/// Tests deleting a post twice.
///
/// Expected: Ok(false) on the second call
#[tokio::test]
async fn second_delete_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;

    let repo = SocialRepository::new(db);
    assert!(repo.soft_delete(social.id).await?);
    assert!(!repo.soft_delete(social.id).await?);

    Ok(())
}

use super::*;

/// Tests recording, finding and removing a post like.
///
/// Expected: Like visible through find and liked_by until deleted
#[tokio::test]
async fn create_find_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let other = factory::social::create_social(db, author.id).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = SocialLikeRepository::new(db);
    let like = repo.create(social.id, fan.id).await?;

    assert_eq!(repo.find(social.id, fan.id).await?.map(|l| l.id), Some(like.id));
    let liked = repo.liked_by(fan.id, &[social.id, other.id]).await?;
    assert!(liked.contains(&social.id));
    assert!(!liked.contains(&other.id));

    assert!(repo.delete(social.id, fan.id).await?);
    assert!(repo.find(social.id, fan.id).await?.is_none());

    Ok(())
}

/// Tests that the like row and the post counter move together.
///
/// Expected: Counter incremented on create, decremented once on delete, untouched when
/// there is nothing to delete
#[tokio::test]
async fn keeps_counter_in_step() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let fan = factory::user::create_user(db).await?;
    let like_count = || async {
        SocialRepository::new(db)
            .find_live_by_id(social.id)
            .await
            .map(|s| s.map(|s| s.like_count))
    };

    let repo = SocialLikeRepository::new(db);
    repo.create(social.id, fan.id).await?;
    assert_eq!(like_count().await?, Some(1));

    assert!(repo.delete(social.id, fan.id).await?);
    assert_eq!(like_count().await?, Some(0));

    assert!(!repo.delete(social.id, fan.id).await?);
    assert_eq!(like_count().await?, Some(0));

    Ok(())
}

/// Tests a duplicate like hitting the unique index.
///
/// Expected: Unique constraint violation and the counter keeps the first like only
#[tokio::test]
async fn duplicate_rolls_back_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = SocialLikeRepository::new(db);
    repo.create(social.id, fan.id).await?;

    let err = repo.create(social.id, fan.id).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let stored = SocialRepository::new(db)
        .find_live_by_id(social.id)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 1);

    Ok(())
}

use super::*;
use crate::server::{data::social::SocialRepository, service::like::LikeService};

/// Tests liking and unliking a post.
///
/// Expected: Counter follows likes; duplicate like and missing like are rejected
#[tokio::test]
async fn social_like_updates_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let fan = factory::user::create_user(db).await?;

    let service = LikeService::new(db);
    let like_count = || async {
        SocialRepository::new(db)
            .find_live_by_id(social.id)
            .await
            .map(|s| s.map(|s| s.like_count))
    };

    service.like_social(fan.id, social.id).await?;
    assert_eq!(like_count().await?, Some(1));

    assert!(is_code(
        &service.like_social(fan.id, social.id).await,
        ErrorCode::ExistsLike
    ));
    assert_eq!(like_count().await?, Some(1));

    service.unlike_social(fan.id, social.id).await?;
    assert_eq!(like_count().await?, Some(0));

    assert!(is_code(
        &service.unlike_social(fan.id, social.id).await,
        ErrorCode::NotFoundLike
    ));

    Ok(())
}

/// Tests two unlikes of the same post racing each other.
///
/// Expected: Exactly one succeeds, the other reports NotFoundLike, counter ends at zero
#[tokio::test]
async fn concurrent_unlikes_decrement_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let fan = factory::user::create_user(db).await?;

    let service = LikeService::new(db);
    service.like_social(fan.id, social.id).await?;

    let (first, second) = tokio::join!(
        service.unlike_social(fan.id, social.id),
        service.unlike_social(fan.id, social.id)
    );

    assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
    assert!(
        is_code(&first, ErrorCode::NotFoundLike) || is_code(&second, ErrorCode::NotFoundLike)
    );

    let stored = SocialRepository::new(db)
        .find_live_by_id(social.id)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 0);

    Ok(())
}

/// Tests two likes of the same post racing each other.
///
/// Expected: Exactly one succeeds, the other reports ExistsLike, counter ends at one
#[tokio::test]
async fn concurrent_likes_count_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let fan = factory::user::create_user(db).await?;

    let service = LikeService::new(db);
    let (first, second) = tokio::join!(
        service.like_social(fan.id, social.id),
        service.like_social(fan.id, social.id)
    );

    assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
    assert!(is_code(&first, ErrorCode::ExistsLike) || is_code(&second, ErrorCode::ExistsLike));

    let stored = SocialRepository::new(db)
        .find_live_by_id(social.id)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 1);

    Ok(())
}

/// Tests liking a post that does not exist.
///
/// Expected: NotFoundSocialBoard
#[tokio::test]
async fn social_like_requires_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fan = factory::user::create_user(db).await?;

    let result = LikeService::new(db).like_social(fan.id, 9999).await;

    assert!(is_code(&result, ErrorCode::NotFoundSocialBoard));

    Ok(())
}

/// Tests comment likes.
///
/// Expected: Comment must belong to the post; duplicates and missing likes rejected
#[tokio::test]
async fn comment_like_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let other_social = factory::social::create_social(db, author.id).await?;
    let comment = factory::comment::create_comment(db, social.id, author.id).await?;
    let fan = factory::user::create_user(db).await?;

    let service = LikeService::new(db);

    assert!(is_code(
        &service.like_comment(fan.id, other_social.id, comment.id).await,
        ErrorCode::InvalidCommentForBoard
    ));

    service.like_comment(fan.id, social.id, comment.id).await?;
    assert!(is_code(
        &service.like_comment(fan.id, social.id, comment.id).await,
        ErrorCode::ExistsLike
    ));

    service.unlike_comment(fan.id, social.id, comment.id).await?;
    assert!(is_code(
        &service.unlike_comment(fan.id, social.id, comment.id).await,
        ErrorCode::NotFoundLike
    ));

    Ok(())
}

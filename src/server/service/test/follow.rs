use super::*;
use crate::server::service::follow::FollowService;

/// Tests follow rules.
///
/// Expected: Self-follow, unknown targets and duplicates are rejected
#[tokio::test]
async fn follow_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let duck = factory::user::create_user(db).await?;
    let goose = factory::user::create_user(db).await?;

    let service = FollowService::new(db);
    assert!(is_code(
        &service.follow(duck.id, duck.id).await,
        ErrorCode::CannotFollowSelf
    ));
    assert!(is_code(
        &service.follow(duck.id, 9999).await,
        ErrorCode::NotFoundUser
    ));

    service.follow(duck.id, goose.id).await?;
    assert!(is_code(
        &service.follow(duck.id, goose.id).await,
        ErrorCode::ExistsFollow
    ));

    Ok(())
}

/// Tests unfollowing.
///
/// Expected: First unfollow succeeds, second reports NotFoundFollow
#[tokio::test]
async fn unfollow_requires_follow() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let duck = factory::user::create_user(db).await?;
    let goose = factory::user::create_user(db).await?;
    factory::follow::create_follow(db, duck.id, goose.id).await?;

    let service = FollowService::new(db);
    service.unfollow(duck.id, goose.id).await?;

    assert!(is_code(
        &service.unfollow(duck.id, goose.id).await,
        ErrorCode::NotFoundFollow
    ));
    assert!(is_code(
        &service.unfollow(duck.id, 9999).await,
        ErrorCode::NotFoundUser
    ));

    Ok(())
}

/// Tests two follows of the same user racing each other.
///
/// Expected: Exactly one succeeds, the other reports ExistsFollow
#[tokio::test]
async fn concurrent_follows_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let duck = factory::user::create_user(db).await?;
    let goose = factory::user::create_user(db).await?;

    let service = FollowService::new(db);
    let (first, second) = tokio::join!(
        service.follow(duck.id, goose.id),
        service.follow(duck.id, goose.id)
    );

    assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
    assert!(
        is_code(&first, ErrorCode::ExistsFollow) || is_code(&second, ErrorCode::ExistsFollow)
    );

    Ok(())
}

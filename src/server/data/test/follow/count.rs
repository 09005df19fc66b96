use super::*;

/// Tests follower and following counts.
///
/// Expected: Counts reflect each direction separately
#[tokio::test]
async fn counts_each_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let duck = factory::user::create_user(db).await?;
    let goose = factory::user::create_user(db).await?;
    let swan = factory::user::create_user(db).await?;

    factory::follow::create_follow(db, goose.id, duck.id).await?;
    factory::follow::create_follow(db, swan.id, duck.id).await?;
    factory::follow::create_follow(db, duck.id, swan.id).await?;

    let repo = FollowRepository::new(db);
    assert_eq!(repo.count_followers(duck.id).await?, 2);
    assert_eq!(repo.count_following(duck.id).await?, 1);
    assert_eq!(repo.count_followers(goose.id).await?, 0);
    assert!(repo.exists(goose.id, duck.id).await?);
    assert!(!repo.exists(duck.id, goose.id).await?);

    Ok(())
}

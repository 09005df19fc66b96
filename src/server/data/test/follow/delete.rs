use super::*;

/// Tests removing a follow.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let duck = factory::user::create_user(db).await?;
    let goose = factory::user::create_user(db).await?;

    let repo = FollowRepository::new(db);
    repo.create(duck.id, goose.id).await?;

    assert!(repo.delete(duck.id, goose.id).await?);
    assert!(!repo.delete(duck.id, goose.id).await?);
    assert!(!repo.exists(duck.id, goose.id).await?);

    Ok(())
}

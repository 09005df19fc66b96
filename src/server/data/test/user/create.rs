use super::*;

/// Tests registering a user.
///
/// Expected: Ok(User) findable by id and login id
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(RegisterUserParams {
            nickname: "duck".to_string(),
            login_id: "duck01".to_string(),
        })
        .await?;

    assert_eq!(user.nickname, "duck");
    assert_eq!(repo.find_by_id(user.id).await?.map(|u| u.login_id), Some("duck01".to_string()));
    assert_eq!(repo.find_by_login_id("duck01").await?.map(|u| u.id), Some(user.id));
    assert!(repo.exists(user.id).await?);
    assert!(repo.login_id_taken("duck01").await?);
    assert!(repo.nickname_taken("duck").await?);
    assert!(!repo.nickname_taken("goose").await?);

    Ok(())
}

/// Tests the nickname unique constraint.
///
/// Expected: Err(DbErr) on a duplicate nickname
#[tokio::test]
async fn rejects_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("duck")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(RegisterUserParams {
            nickname: "duck".to_string(),
            login_id: "other".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

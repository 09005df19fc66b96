use super::*;

/// Tests changing a nickname.
///
/// Expected: Ok(Some(User)) with the new nickname
#[tokio::test]
async fn updates_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update_nickname(user.id, "renamed".to_string())
        .await?;

    assert_eq!(updated.map(|u| u.nickname), Some("renamed".to_string()));

    Ok(())
}

/// Tests renaming a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update_nickname(9999, "ghost".to_string())
        .await?;

    assert!(updated.is_none());

    Ok(())
}

use super::*;

/// Tests batch lookup by id.
///
/// Expected: Map contains the existing users only
#[tokio::test]
async fn skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let users = UserRepository::new(db)
        .get_by_ids(&[first.id, second.id, 9999])
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&first.id].nickname, first.nickname);
    assert!(!users.contains_key(&9999));

    Ok(())
}

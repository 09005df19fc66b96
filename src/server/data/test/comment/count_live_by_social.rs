use super::*;

/// Tests batch comment counting.
///
/// Expected: Live comments counted per post; posts without comments absent
#[tokio::test]
async fn counts_per_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let busy = factory::social::create_social(db, author.id).await?;
    let quiet = factory::social::create_social(db, author.id).await?;

    factory::comment::create_comment(db, busy.id, author.id).await?;
    factory::comment::create_comment(db, busy.id, author.id).await?;
    let deleted = factory::comment::create_comment(db, busy.id, author.id).await?;

    let repo = CommentRepository::new(db);
    repo.soft_delete(deleted.id).await?;

    let counts = repo.count_live_by_social(&[busy.id, quiet.id]).await?;

    assert_eq!(counts.get(&busy.id), Some(&2));
    assert_eq!(counts.get(&quiet.id), None);

    Ok(())
}

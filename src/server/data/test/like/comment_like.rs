use super::*;

/// Tests summarizing comment likes for a viewer.
///
/// Expected: Count per comment and whether the viewer is among the likers
#[tokio::test]
async fn summarizes_counts_and_viewer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let viewer = factory::user::create_user(db).await?;
    let liked = factory::comment::create_comment(db, social.id, author.id).await?;
    let unliked = factory::comment::create_comment(db, social.id, author.id).await?;

    let repo = CommentLikeRepository::new(db);
    repo.create(liked.id, viewer.id).await?;
    repo.create(liked.id, author.id).await?;

    let summary = repo.summarize(&[liked.id, unliked.id], viewer.id).await?;

    assert_eq!(summary.get(&liked.id), Some(&(2, true)));
    assert_eq!(summary.get(&unliked.id), None);

    let by_author = repo.summarize(&[liked.id], author.id).await?;
    assert_eq!(by_author.get(&liked.id), Some(&(2, true)));

    let stranger = repo.summarize(&[liked.id], 9999).await?;
    assert_eq!(stranger.get(&liked.id), Some(&(2, false)));

    Ok(())
}

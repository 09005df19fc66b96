use super::*;

/// Tests listing comments of a post.
///
/// Verifies that comments come back oldest first with their authors, and that deleted
/// comments and comments on other posts are excluded.
///
/// Expected: Two live comments in creation order
#[tokio::test]
async fn returns_live_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _category, social) =
        factory::helpers::create_social_with_dependencies(db).await?;
    let other_social = factory::social::create_social(db, author.id).await?;
    let commenter = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let first = repo
        .create(CreateCommentParams {
            social_id: social.id,
            user_id: commenter.id,
            content: "first".to_string(),
        })
        .await?;
    let removed = factory::comment::create_comment(db, social.id, author.id).await?;
    let second = factory::comment::create_comment(db, social.id, author.id).await?;
    factory::comment::create_comment(db, other_social.id, author.id).await?;

    assert!(repo.soft_delete(removed.id).await?);

    let comments = repo.get_live_for_social(social.id).await?;

    let ids: Vec<i32> = comments.iter().map(|(comment, _)| comment.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(
        comments[0].1.as_ref().map(|user| user.id),
        Some(commenter.id)
    );
    assert!(repo.find_live_by_id(removed.id).await?.is_none());

    Ok(())
}

use super::*;

/// Tests the first page of a feed longer than the limit.
///
/// Verifies that the newest `limit` posts come back in descending id order and that the
/// cursor points at the last returned post.
///
/// Expected: 10 newest posts, has_more true, next_cursor = id of the 10th post
#[tokio::test]
async fn returns_newest_posts_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let socials = factory::social::create_socials(db, author.id, 15).await?;

    let page = SocialRepository::new(db)
        .get_page(&SocialScope::All, None, limit(10))
        .await?;

    let expected: Vec<i32> = socials.iter().rev().take(10).map(|s| s.id).collect();
    assert_eq!(ids(&page), expected);
    assert!(page.has_more);
    assert_eq!(page.next_cursor, Some(socials[5].id));

    Ok(())
}

/// Tests following the cursor to the end of the feed.
///
/// Expected: Remaining 5 posts, has_more false, no next_cursor
#[tokio::test]
async fn second_page_is_last() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let socials = factory::social::create_socials(db, author.id, 15).await?;

    let repo = SocialRepository::new(db);
    let first = repo.get_page(&SocialScope::All, None, limit(10)).await?;
    let second = repo
        .get_page(&SocialScope::All, first.next_cursor, limit(10))
        .await?;

    let expected: Vec<i32> = socials.iter().take(5).rev().map(|s| s.id).collect();
    assert_eq!(ids(&second), expected);
    assert!(!second.has_more);
    assert_eq!(second.next_cursor, None);

    Ok(())
}

/// Tests paging an empty feed.
///
/// Expected: No results, has_more false, no next_cursor
#[tokio::test]
async fn empty_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = SocialRepository::new(db)
        .get_page(&SocialScope::All, None, limit(10))
        .await?;

    assert!(page.results.is_empty());
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, None);

    Ok(())
}

/// Tests a cursor at the oldest post.
///
/// Expected: Empty page without a cursor
#[tokio::test]
async fn cursor_at_oldest_post_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let socials = factory::social::create_socials(db, author.id, 3).await?;

    let page = SocialRepository::new(db)
        .get_page(&SocialScope::All, Some(socials[0].id), limit(10))
        .await?;

    assert!(page.results.is_empty());
    assert!(!page.has_more);

    Ok(())
}

/// Tests that posts created after the first page do not shift the second page.
///
/// Expected: Second page holds exactly the posts older than the cursor
#[tokio::test]
async fn inserts_during_paging_do_not_shift_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let socials = factory::social::create_socials(db, author.id, 6).await?;

    let repo = SocialRepository::new(db);
    let first = repo.get_page(&SocialScope::All, None, limit(3)).await?;

    factory::social::create_socials(db, author.id, 4).await?;

    let second = repo
        .get_page(&SocialScope::All, first.next_cursor, limit(3))
        .await?;

    let expected: Vec<i32> = socials.iter().take(3).rev().map(|s| s.id).collect();
    assert_eq!(ids(&second), expected);
    assert!(!second.has_more);

    Ok(())
}

/// Tests walking the whole feed one page at a time.
///
/// Verifies that every post is returned exactly once across pages, in descending order.
///
/// Expected: Concatenated pages equal all posts newest first
#[tokio::test]
async fn chained_pages_cover_every_post_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let socials = factory::social::create_socials(db, author.id, 7).await?;

    let repo = SocialRepository::new(db);
    let mut seen = Vec::new();
    let mut cursor = None;
    loop {
        let page = repo.get_page(&SocialScope::All, cursor, limit(3)).await?;
        seen.extend(ids(&page));
        if !page.has_more {
            break;
        }
        cursor = page.next_cursor;
    }

    let expected: Vec<i32> = socials.iter().rev().map(|s| s.id).collect();
    assert_eq!(seen, expected);

    Ok(())
}

/// Tests that soft-deleted posts are skipped and the cursor still works past them.
///
/// Expected: Deleted posts never appear; a cursor on a deleted post still pages older posts
#[tokio::test]
async fn skips_deleted_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let oldest = factory::social::create_social(db, author.id).await?;
    let deleted = factory::social::SocialFactory::new(db, author.id)
        .deleted()
        .build()
        .await?;
    let newest = factory::social::create_social(db, author.id).await?;

    let repo = SocialRepository::new(db);
    let page = repo.get_page(&SocialScope::All, None, limit(10)).await?;
    assert_eq!(ids(&page), vec![newest.id, oldest.id]);

    let after_deleted = repo
        .get_page(&SocialScope::All, Some(deleted.id), limit(10))
        .await?;
    assert_eq!(ids(&after_deleted), vec![oldest.id]);

    Ok(())
}

/// Tests that a deleted oldest post does not report another page.
///
/// Expected: has_more false when the only older row is soft-deleted
#[tokio::test]
async fn deleted_tail_does_not_report_more() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    factory::social::SocialFactory::new(db, author.id)
        .deleted()
        .build()
        .await?;
    let live = factory::social::create_social(db, author.id).await?;

    let page = SocialRepository::new(db)
        .get_page(&SocialScope::All, None, limit(1))
        .await?;

    assert_eq!(ids(&page), vec![live.id]);
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, None);

    Ok(())
}

/// Tests the author scope.
///
/// Expected: Only the author's posts
#[tokio::test]
async fn author_scope_filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let first = factory::social::create_social(db, author.id).await?;
    factory::social::create_social(db, other.id).await?;
    let second = factory::social::create_social(db, author.id).await?;

    let page = SocialRepository::new(db)
        .get_page(&SocialScope::Author(author.id), None, limit(10))
        .await?;

    assert_eq!(ids(&page), vec![second.id, first.id]);
    assert!(!page.has_more);

    Ok(())
}

/// Tests the category scope.
///
/// Verifies that a post tagged with any of the requested categories is returned once,
/// even when it carries several of them.
///
/// Expected: Posts tagged with either category, without duplicates
#[tokio::test]
async fn category_scope_matches_any_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let study = factory::social_category::create_category_named(db, "study").await?;
    let sport = factory::social_category::create_category_named(db, "sport").await?;
    let food = factory::social_category::create_category_named(db, "food").await?;

    let tagged_study = factory::social::SocialFactory::new(db, author.id)
        .categories(vec![study.id])
        .build()
        .await?;
    factory::social::SocialFactory::new(db, author.id)
        .categories(vec![food.id])
        .build()
        .await?;
    let tagged_both = factory::social::SocialFactory::new(db, author.id)
        .categories(vec![study.id, sport.id])
        .build()
        .await?;

    let page = SocialRepository::new(db)
        .get_page(
            &SocialScope::Categories(vec![study.id, sport.id]),
            None,
            limit(10),
        )
        .await?;

    assert_eq!(ids(&page), vec![tagged_both.id, tagged_study.id]);
    assert!(!page.has_more);

    Ok(())
}

/// Tests `has_more` inside a category scope.
///
/// Expected: has_more only counts older posts in the same scope
#[tokio::test]
async fn category_scope_has_more_ignores_other_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let study = factory::social_category::create_category(db).await?;
    let food = factory::social_category::create_category(db).await?;

    factory::social::SocialFactory::new(db, author.id)
        .categories(vec![food.id])
        .build()
        .await?;
    let tagged = factory::social::SocialFactory::new(db, author.id)
        .categories(vec![study.id])
        .build()
        .await?;

    let page = SocialRepository::new(db)
        .get_page(&SocialScope::Categories(vec![study.id]), None, limit(1))
        .await?;

    assert_eq!(ids(&page), vec![tagged.id]);
    assert!(!page.has_more);

    Ok(())
}

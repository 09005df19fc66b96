use super::*;

/// Tests creating a post with categories and images.
///
/// Expected: Post row plus one link per category and one image row per URL
#[tokio::test]
async fn stores_post_with_links_and_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let study = factory::social_category::create_category(db).await?;
    let sport = factory::social_category::create_category(db).await?;

    let social = SocialRepository::new(db)
        .create(CreateSocialParams {
            user_id: author.id,
            content: "Morning run done".to_string(),
            is_anonymous: true,
            category_ids: vec![study.id, sport.id],
            image_urls: vec![
                "https://cdn.example/a.png".to_string(),
                "https://cdn.example/b.png".to_string(),
            ],
            routine_id: None,
        })
        .await?;

    assert_eq!(social.user_id, author.id);
    assert_eq!(social.content, "Morning run done");
    assert!(social.is_anonymous);
    assert_eq!(social.like_count, 0);
    assert!(social.deleted_at.is_none());

    let links = entity::prelude::SocialCategoryLink::find()
        .filter(entity::social_category_link::Column::SocialId.eq(social.id))
        .count(db)
        .await?;
    assert_eq!(links, 2);

    let images = SocialRepository::new(db)
        .get_image_urls(&[social.id])
        .await?;
    assert_eq!(
        images.get(&social.id).cloned().unwrap_or_default(),
        vec![
            "https://cdn.example/a.png".to_string(),
            "https://cdn.example/b.png".to_string()
        ]
    );

    Ok(())
}

/// Tests that a failing category link rolls the post back.
///
/// Expected: Err(DbErr) and no post stored
#[tokio::test]
async fn rolls_back_on_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let result = SocialRepository::new(db)
        .create(CreateSocialParams {
            user_id: author.id,
            content: "Orphan".to_string(),
            is_anonymous: false,
            category_ids: vec![9999],
            image_urls: Vec::new(),
            routine_id: None,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Social::find().count(db).await?, 0);

    Ok(())
}

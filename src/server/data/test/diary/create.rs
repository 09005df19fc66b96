use super::*;

/// Tests storing a diary with images.
///
/// Expected: Diary findable by date with images in insertion order
#[tokio::test]
async fn stores_diary_with_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();

    let repo = DiaryRepository::new(db);
    let diary = repo
        .create(entry(
            user.id,
            date,
            vec!["https://cdn.example/1.png".to_string(), "https://cdn.example/2.png".to_string()],
        ))
        .await?;

    assert_eq!(diary.emotion, "HAPPY");
    assert_eq!(
        repo.find_live_by_date(user.id, date).await?.map(|d| d.id),
        Some(diary.id)
    );

    let images = repo.get_image_urls(&[diary.id]).await?;
    assert_eq!(
        images.get(&diary.id).cloned().unwrap_or_default(),
        vec!["https://cdn.example/1.png".to_string(), "https://cdn.example/2.png".to_string()]
    );

    Ok(())
}

/// Tests that a deleted diary frees its date.
///
/// Expected: find_live_by_date returns None after soft delete
#[tokio::test]
async fn soft_delete_hides_diary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();

    let repo = DiaryRepository::new(db);
    let diary = repo.create(entry(user.id, date, Vec::new())).await?;

    assert!(repo.soft_delete(diary.id).await?);
    assert!(!repo.soft_delete(diary.id).await?);
    assert!(repo.find_live_by_date(user.id, date).await?.is_none());
    assert!(repo.find_live_by_id(diary.id).await?.is_none());

    Ok(())
}

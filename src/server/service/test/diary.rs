use super::*;
use crate::server::{
    model::diary::{CreateDiaryParams, Emotion},
    service::diary::DiaryService,
    util::date::MonthRange,
};
use chrono::NaiveDate;

fn entry(user_id: i32, date: NaiveDate) -> CreateDiaryParams {
    CreateDiaryParams {
        user_id,
        date,
        emotion: Emotion::Tired,
        title: None,
        memo: Some("Long day".to_string()),
        image_urls: vec!["https://cdn.example/d.png".to_string()],
    }
}

/// Tests one diary per date.
///
/// Expected: ExistsDateDiary until the first diary is deleted
#[tokio::test]
async fn one_diary_per_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

    let service = DiaryService::new(db);
    let first = service.create(entry(user.id, date)).await?;

    assert!(is_code(
        &service.create(entry(user.id, date)).await,
        ErrorCode::ExistsDateDiary
    ));

    service.delete(user.id, first).await?;
    service.create(entry(user.id, date)).await?;

    Ok(())
}

/// Tests monthly listing with images.
///
/// Expected: Diary with parsed emotion and its image URLs
#[tokio::test]
async fn monthly_listing_includes_images() -> Result<(), AppError> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

    let service = DiaryService::new(db);
    let id = service.create(entry(user.id, date)).await?;

    let diaries = service
        .get_monthly(user.id, MonthRange::parse("2025-07")?)
        .await?;

    assert_eq!(diaries.len(), 1);
    assert_eq!(diaries[0].id, id);
    assert_eq!(diaries[0].emotion, Emotion::Tired);
    assert_eq!(
        diaries[0].image_urls,
        vec!["https://cdn.example/d.png".to_string()]
    );

    Ok(())
}

/// Tests deleting another user's diary.
///
/// Expected: NotFoundDiary
#[tokio::test]
async fn delete_requires_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let id = DiaryService::new(db)
        .create(entry(owner.id, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()))
        .await?;

    let result = DiaryService::new(db).delete(stranger.id, id).await;

    assert!(is_code(&result, ErrorCode::NotFoundDiary));

    Ok(())
}

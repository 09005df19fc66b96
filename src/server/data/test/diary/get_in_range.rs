use super::*;

/// Tests monthly listing.
///
/// Expected: Live diaries of the user inside the range, ordered by date
#[tokio::test]
async fn returns_live_diaries_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let day = |m: u32, d: u32| NaiveDate::from_ymd_opt(2025, m, d).unwrap();

    let repo = DiaryRepository::new(db);
    let late = repo.create(entry(user.id, day(5, 20), Vec::new())).await?;
    let early = repo.create(entry(user.id, day(5, 2), Vec::new())).await?;
    let deleted = repo.create(entry(user.id, day(5, 9), Vec::new())).await?;
    repo.create(entry(user.id, day(6, 1), Vec::new())).await?;
    repo.create(entry(other.id, day(5, 3), Vec::new())).await?;
    repo.soft_delete(deleted.id).await?;

    let ids: Vec<i32> = repo
        .get_in_range(user.id, day(5, 1), day(6, 1))
        .await?
        .iter()
        .map(|diary| diary.id)
        .collect();

    assert_eq!(ids, vec![early.id, late.id]);

    Ok(())
}

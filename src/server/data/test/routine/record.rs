use super::*;

/// Tests that completion records are overwritten rather than duplicated.
///
/// Expected: One record per routine and date holding the latest state
#[tokio::test]
async fn upsert_overwrites_same_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_routine_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let routine = factory::routine::create_routine(db, user.id).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let repo = RoutineRecordRepository::new(db);
    repo.upsert(routine.id, date, true).await?;
    let record = repo.upsert(routine.id, date, false).await?;

    assert!(!record.is_completed);
    assert_eq!(entity::prelude::RoutineRecord::find().count(db).await?, 1);

    Ok(())
}

/// Tests reading completion state for a date.
///
/// Expected: Only routines completed on that exact date
#[tokio::test]
async fn completed_on_matches_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_routine_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let done = factory::routine::create_routine(db, user.id).await?;
    let undone = factory::routine::create_routine(db, user.id).await?;
    let other_day = factory::routine::create_routine(db, user.id).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let repo = RoutineRecordRepository::new(db);
    repo.upsert(done.id, date, true).await?;
    repo.upsert(undone.id, date, false).await?;
    repo.upsert(other_day.id, date.succ_opt().unwrap(), true)
        .await?;

    let completed = repo
        .completed_on(&[done.id, undone.id, other_day.id], date)
        .await?;

    assert!(completed.contains(&done.id));
    assert!(!completed.contains(&undone.id));
    assert!(!completed.contains(&other_day.id));

    Ok(())
}

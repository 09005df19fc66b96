use super::*;

/// Tests that completion is written once per day and then overwritten.
///
/// Expected: The second upsert updates the same record
#[tokio::test]
async fn upsert_overwrites_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let schedule = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(1), march(31))
        .build()
        .await?;
    let repo = ScheduleRecordRepository::new(db);

    let first = repo.upsert(schedule.id, march(5), true).await?;
    let second = repo.upsert(schedule.id, march(5), false).await?;

    assert_eq!(first.id, second.id);
    assert!(!second.is_completed);
    let count = entity::prelude::ScheduleRecord::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests removing occurrences with and without an existing record.
///
/// Expected: An existing record is soft-deleted in place; a day without one gets a deleted
/// record; both still show up to `find_by_date` and `get_in_range`
#[tokio::test]
async fn soft_delete_occurrence_marks_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let schedule = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(1), march(31))
        .build()
        .await?;
    let done = factory::schedule::create_record(db, schedule.id, march(4), true).await?;

    let repo = ScheduleRecordRepository::new(db);
    repo.soft_delete_occurrence(schedule.id, march(4)).await?;
    repo.soft_delete_occurrence(schedule.id, march(6)).await?;
    repo.soft_delete_occurrence(schedule.id, march(6)).await?;

    let removed = repo.find_by_date(schedule.id, march(4)).await?.unwrap();
    assert_eq!(removed.id, done.id);
    assert!(removed.deleted_at.is_some());

    let records = repo.get_in_range(&[schedule.id], march(1), march(31)).await?;
    let dates: Vec<NaiveDate> = records.iter().map(|record| record.record_date).collect();
    assert_eq!(dates, vec![march(4), march(6)]);
    assert!(records.iter().all(|record| record.deleted_at.is_some()));

    Ok(())
}

/// Tests the batched range lookup over several schedules.
///
/// Expected: Only records of the given schedules inside the range, ordered by date
#[tokio::test]
async fn get_in_range_filters_schedules_and_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(1), march(31))
        .build()
        .await?;
    let second = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(1), march(31))
        .build()
        .await?;
    let skipped = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(1), march(31))
        .build()
        .await?;

    factory::schedule::create_record(db, second.id, march(9), true).await?;
    factory::schedule::create_record(db, first.id, march(8), false).await?;
    factory::schedule::create_record(db, first.id, march(20), true).await?;
    factory::schedule::create_record(db, skipped.id, march(8), true).await?;

    let records = ScheduleRecordRepository::new(db)
        .get_in_range(&[first.id, second.id], march(1), march(10))
        .await?;

    let found: Vec<(i32, NaiveDate)> = records
        .iter()
        .map(|record| (record.schedule_id, record.record_date))
        .collect();
    assert_eq!(found, vec![(first.id, march(8)), (second.id, march(9))]);

    Ok(())
}

/// Tests the record lookup joined with its schedule.
///
/// Expected: Live record returned with its schedule; removed records and records of
/// deleted schedules are not
#[tokio::test]
async fn find_live_with_schedule_requires_both_live() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let schedule = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(1), march(31))
        .build()
        .await?;
    let live = factory::schedule::create_record(db, schedule.id, march(2), true).await?;
    let removed = factory::schedule::create_record(db, schedule.id, march(3), false).await?;

    let repo = ScheduleRecordRepository::new(db);
    repo.soft_delete_occurrence(schedule.id, march(3)).await?;

    let (record, owner) = repo.find_live_with_schedule(live.id).await?.unwrap();
    assert_eq!(record.id, live.id);
    assert_eq!(owner.id, schedule.id);
    assert!(repo.find_live_with_schedule(removed.id).await?.is_none());

    ScheduleRepository::new(db).soft_delete(schedule.id).await?;
    assert!(repo.find_live_with_schedule(live.id).await?.is_none());

    Ok(())
}

use super::*;

/// Tests cutting a schedule short.
///
/// Expected: End date moved to the last day; uncompleted and removed records after it are
/// dropped; completed records after it and every record before it remain
#[tokio::test]
async fn truncate_keeps_completed_history() -> Result<(), DbErr> {
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
    let before = factory::schedule::create_record(db, schedule.id, march(5), false).await?;
    let last = factory::schedule::create_record(db, schedule.id, march(10), false).await?;
    let done_after = factory::schedule::create_record(db, schedule.id, march(12), true).await?;
    factory::schedule::create_record(db, schedule.id, march(15), false).await?;

    let records = ScheduleRecordRepository::new(db);
    records.soft_delete_occurrence(schedule.id, march(20)).await?;

    let repo = ScheduleRepository::new(db);
    repo.truncate(schedule.id, march(10)).await?;

    let updated = repo.find_live_by_id(schedule.id).await?.unwrap();
    assert_eq!(updated.start_date, march(1));
    assert_eq!(updated.end_date, march(10));

    let mut kept: Vec<i32> = entity::prelude::ScheduleRecord::find()
        .all(db)
        .await?
        .iter()
        .map(|record| record.id)
        .collect();
    kept.sort();
    assert_eq!(kept, vec![before.id, last.id, done_after.id]);

    Ok(())
}

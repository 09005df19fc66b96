use super::*;

/// Tests that a created schedule stores its category and weekday mask.
///
/// Expected: Category stored by name, mask stored as bits, all-day flag kept
#[tokio::test]
async fn create_stores_category_and_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let schedule = ScheduleRepository::new(db)
        .create(CreateScheduleParams {
            user_id: user.id,
            title: "Swim".to_string(),
            category: Some(PlanCategory::Power),
            color: None,
            start_date: march(3),
            end_date: march(16),
            is_all_day: true,
            time: None,
            days: Some(DaysOfWeek::from_bits(0b0000_0010).unwrap()),
            location: Some("Pool".to_string()),
            memo: None,
        })
        .await?;

    assert_eq!(schedule.category.as_deref(), Some("POWER"));
    assert_eq!(schedule.days_of_week, Some(0b0000_0010));
    assert!(schedule.is_all_day);
    assert!(schedule.deleted_at.is_none());

    Ok(())
}

/// Tests range overlap filtering of a user's schedules.
///
/// Expected: Schedules touching either edge are listed by start date; disjoint, deleted and
/// foreign schedules are not
#[tokio::test]
async fn lists_schedules_touching_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let ends_on_start = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(1), march(10))
        .build()
        .await?;
    let starts_on_end = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(20), march(25))
        .build()
        .await?;
    let inside = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(12), march(12))
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(21), march(31))
        .build()
        .await?;
    let deleted = factory::schedule::ScheduleFactory::new(db, user.id)
        .dates(march(11), march(12))
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db, other.id)
        .dates(march(10), march(20))
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    assert!(repo.soft_delete(deleted.id).await?);
    assert!(!repo.soft_delete(deleted.id).await?);

    let ids: Vec<i32> = repo
        .get_live_overlapping(user.id, march(10), march(20))
        .await?
        .iter()
        .map(|schedule| schedule.id)
        .collect();

    assert_eq!(ids, vec![ends_on_start.id, inside.id, starts_on_end.id]);
    assert!(repo.find_live_by_id(deleted.id).await?.is_none());

    Ok(())
}

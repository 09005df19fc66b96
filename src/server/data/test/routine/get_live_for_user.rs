use super::*;

/// Tests routine ordering for a user.
///
/// Expected: Timed routines by time of day, untimed routines last; category stored by name
#[tokio::test]
async fn orders_by_time_with_untimed_last() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_routine_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = RoutineRepository::new(db);

    let untimed = repo.create(params(user.id, "stretch", None)).await?;
    assert_eq!(untimed.category.as_deref(), Some("SLEEP"));
    let evening = repo
        .create(params(user.id, "read", NaiveTime::from_hms_opt(21, 0, 0)))
        .await?;
    let morning = repo
        .create(params(user.id, "run", NaiveTime::from_hms_opt(7, 30, 0)))
        .await?;

    let ids: Vec<i32> = repo
        .get_live_for_user(user.id)
        .await?
        .iter()
        .map(|routine| routine.id)
        .collect();

    assert_eq!(ids, vec![morning.id, evening.id, untimed.id]);

    Ok(())
}

/// Tests that deleted and private routines are filtered where expected.
///
/// Expected: Deleted routines never listed; private routines hidden from the public list
#[tokio::test]
async fn filters_deleted_and_private() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_routine_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let public = factory::routine::create_routine(db, user.id).await?;
    let private = factory::routine::RoutineFactory::new(db, user.id)
        .public(false)
        .build()
        .await?;
    let deleted = factory::routine::create_routine(db, user.id).await?;

    let repo = RoutineRepository::new(db);
    assert!(repo.soft_delete(deleted.id).await?);

    let live: Vec<i32> = repo
        .get_live_for_user(user.id)
        .await?
        .iter()
        .map(|routine| routine.id)
        .collect();
    assert_eq!(live, vec![public.id, private.id]);

    let shown: Vec<i32> = repo
        .get_public_for_user(user.id)
        .await?
        .iter()
        .map(|routine| routine.id)
        .collect();
    assert_eq!(shown, vec![public.id]);

    assert!(repo.find_live_by_id(deleted.id).await?.is_none());

    Ok(())
}

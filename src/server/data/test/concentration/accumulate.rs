use super::*;

/// Tests that repeated saves on one day add up.
///
/// Expected: Target count and time summed, setting count replaced
#[tokio::test]
async fn adds_to_existing_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_concentration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();

    let repo = ConcentrationRepository::new(db);
    let first = repo.accumulate(session(user.id, date, 2, 4, 1500)).await?.unwrap();
    let second = repo.accumulate(session(user.id, date, 3, 5, 900)).await?.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.target_count, 5);
    assert_eq!(second.setting_count, 5);
    assert_eq!(second.time, 2400);

    Ok(())
}

/// Tests that different users and days get separate records.
///
/// Expected: A new record per user and date
#[tokio::test]
async fn separates_users_and_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_concentration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let duck = factory::user::create_user(db).await?;
    let goose = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();

    let repo = ConcentrationRepository::new(db);
    let a = repo.accumulate(session(duck.id, date, 1, 2, 60)).await?.unwrap();
    let b = repo.accumulate(session(goose.id, date, 1, 2, 60)).await?.unwrap();
    let c = repo
        .accumulate(session(duck.id, date.succ_opt().unwrap(), 1, 2, 60))
        .await?
        .unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(a.id, c.id);
    assert_eq!(
        repo.find_by_date(duck.id, date).await?.map(|r| r.time),
        Some(60)
    );

    Ok(())
}

/// Tests a save whose totals no longer fit the day's record.
///
/// Expected: None and the stored record is unchanged
#[tokio::test]
async fn refuses_overflowing_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_concentration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();

    let repo = ConcentrationRepository::new(db);
    repo.accumulate(session(user.id, date, 1, 1, i32::MAX))
        .await?
        .unwrap();

    let overflow = repo.accumulate(session(user.id, date, 1, 1, 1)).await?;
    assert!(overflow.is_none());

    let stored = repo.find_by_date(user.id, date).await?.unwrap();
    assert_eq!(stored.target_count, 1);
    assert_eq!(stored.time, i32::MAX);

    Ok(())
}

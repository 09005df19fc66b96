use super::*;

/// Tests the half-open date range.
///
/// Expected: Records from the start date up to but excluding the end date, by date
#[tokio::test]
async fn returns_records_inside_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_concentration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let day = |d: u32, m: u32| NaiveDate::from_ymd_opt(2025, m, d).unwrap();

    let repo = ConcentrationRepository::new(db);
    repo.accumulate(session(user.id, day(30, 4), 1, 1, 10)).await?;
    repo.accumulate(session(user.id, day(15, 4), 1, 1, 10)).await?;
    repo.accumulate(session(user.id, day(1, 4), 1, 1, 10)).await?;
    repo.accumulate(session(user.id, day(1, 5), 1, 1, 10)).await?;

    let dates: Vec<NaiveDate> = repo
        .get_in_range(user.id, day(1, 4), day(1, 5))
        .await?
        .iter()
        .map(|record| record.date)
        .collect();

    assert_eq!(dates, vec![day(1, 4), day(15, 4), day(30, 4)]);

    Ok(())
}

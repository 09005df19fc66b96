use super::*;
use crate::server::{
    model::concentration::SaveConcentrationParams, service::concentration::ConcentrationService,
    util::date::MonthRange,
};
use chrono::NaiveDate;

/// Tests saving twice on one day and reading the month back.
///
/// Expected: One accumulated record with its percentage
#[tokio::test]
async fn save_accumulates_within_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_concentration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
    let save = |target_count, setting_count, time| SaveConcentrationParams {
        user_id: user.id,
        date,
        target_count,
        setting_count,
        time,
    };

    let service = ConcentrationService::new(db);
    service.save(save(1, 4, 600)).await?;
    let updated = service.save(save(1, 4, 300)).await?;

    assert_eq!(updated.target_count, 2);
    assert_eq!(updated.time, 900);
    assert_eq!(updated.percentage(), 50);

    let monthly = service
        .get_monthly(user.id, MonthRange::parse("2025-06")?)
        .await?;
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].id, updated.id);

    let other_month = service
        .get_monthly(user.id, MonthRange::parse("2025-07")?)
        .await?;
    assert!(other_month.is_empty());

    Ok(())
}

/// Tests saves that push the day's totals past what a record can hold.
///
/// Expected: Validation error and the earlier totals are kept
#[tokio::test]
async fn save_rejects_overflowing_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_concentration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
    let save = |target_count| SaveConcentrationParams {
        user_id: user.id,
        date,
        target_count,
        setting_count: 30_000_000,
        time: 60,
    };

    let service = ConcentrationService::new(db);
    let first = service.save(save(30_000_000)).await?;
    assert_eq!(first.percentage(), 100);

    for _ in 0..70 {
        service.save(save(30_000_000)).await?;
    }
    let result = service.save(save(30_000_000)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let monthly = service
        .get_monthly(user.id, MonthRange::parse("2025-06")?)
        .await?;
    assert_eq!(monthly[0].target_count, 71 * 30_000_000);
    assert_eq!(monthly[0].percentage(), 7100);

    Ok(())
}

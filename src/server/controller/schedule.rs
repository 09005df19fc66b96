use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{
            CreateScheduleDto, ScheduleCompletionDto, ScheduleIdDto, ScheduleRecordDto,
            SchedulesDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::schedule::{CreateScheduleParams, DateRange},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ScheduleRangeParams {
    /// First day of the lookup, `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    /// Last day of the lookup, inclusive.
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OccurrenceParams {
    /// Day of the occurrence to remove.
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteScheduleParams {
    /// First day to delete; omit to delete the whole schedule.
    pub from: Option<NaiveDate>,
}

/// Create a schedule for the logged-in user.
///
/// # Returns
/// - `201 Created` - Id of the new schedule
/// - `400 Bad Request` - Invalid title, dates, time, weekdays or display settings
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleIdDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateScheduleParams::from_dto(user.id, payload)?;

    let schedule = ScheduleService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduleIdDto {
            schedule_id: schedule.id,
        }),
    ))
}

/// List the logged-in user's schedules within a date range.
///
/// # Returns
/// - `200 OK` - Schedules overlapping the range, each with its occurrences in it
/// - `400 Bad Request` - Malformed, reversed or overlong range
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    params(ScheduleRangeParams),
    responses(
        (status = 200, description = "Schedules in the range", body = SchedulesDto),
        (status = 400, description = "Invalid range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ScheduleRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let range = DateRange::new(params.start_date, params.end_date)?;

    let schedules = ScheduleService::new(&state.db)
        .get_for_range(user.id, range)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SchedulesDto {
            start_date: range.start,
            end_date: range.end,
            schedules: schedules
                .into_iter()
                .map(|(schedule, occurrences)| schedule.into_dto(occurrences))
                .collect(),
        }),
    ))
}

/// Get one schedule record of the logged-in user.
///
/// # Returns
/// - `200 OK` - The record and its schedule
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Record missing, removed or owned by someone else (43103)
#[utoipa::path(
    get,
    path = "/api/schedule-records/{record_id}",
    tag = SCHEDULE_TAG,
    params(
        ("record_id" = i32, Path, description = "Schedule record id")
    ),
    responses(
        (status = 200, description = "Schedule record", body = ScheduleRecordDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_record(
    State(state): State<AppState>,
    session: Session,
    Path(record_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let detail = ScheduleService::new(&state.db)
        .get_record(user.id, record_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Mark a schedule occurrence as done or not done.
///
/// # Returns
/// - `204 No Content` - Completion recorded
/// - `400 Bad Request` - No live occurrence on that date (43102)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Schedule missing or owned by someone else (43101)
#[utoipa::path(
    put,
    path = "/api/schedules/{schedule_id}/completion",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule id")
    ),
    request_body = ScheduleCompletionDto,
    responses(
        (status = 204, description = "Completion recorded"),
        (status = 400, description = "Schedule does not occur on the date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_completion(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<ScheduleCompletionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    ScheduleService::new(&state.db)
        .set_completion(user.id, schedule_id, payload.date, payload.is_completed)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a single occurrence of a schedule.
///
/// # Returns
/// - `204 No Content` - Occurrence removed
/// - `400 Bad Request` - No live occurrence on that date (43102)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Schedule missing or owned by someone else (43101)
#[utoipa::path(
    delete,
    path = "/api/schedules/{schedule_id}/occurrences",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule id"),
        OccurrenceParams
    ),
    responses(
        (status = 204, description = "Occurrence removed"),
        (status = 400, description = "Schedule does not occur on the date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_occurrence(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Query(params): Query<OccurrenceParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    ScheduleService::new(&state.db)
        .delete_occurrence(user.id, schedule_id, params.date)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a schedule entirely, or from a date onwards.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - `from` is outside the schedule's range (43102)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Schedule missing or owned by someone else (43101)
#[utoipa::path(
    delete,
    path = "/api/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule id"),
        DeleteScheduleParams
    ),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 400, description = "Date outside the schedule", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Query(params): Query<DeleteScheduleParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    ScheduleService::new(&state.db)
        .delete(user.id, schedule_id, params.from)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

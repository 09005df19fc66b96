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
        routine::{CreateRoutineDto, RoutineCompletionDto, RoutineIdDto, RoutinesForDateDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::routine::{CreateRoutineParams, RoutineForDate},
        service::routine::RoutineService,
        state::AppState,
    },
};

/// Tag for grouping routine endpoints in OpenAPI documentation
pub static ROUTINE_TAG: &str = "routine";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoutineDateParams {
    /// Day to list, formatted as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Create a routine for the logged-in user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Title, display settings and the weekdays the routine repeats on
///
/// # Returns
/// - `201 Created` - Id of the new routine
/// - `400 Bad Request` - Invalid title, color, time, memo or empty weekday list
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/routines",
    tag = ROUTINE_TAG,
    request_body = CreateRoutineDto,
    responses(
        (status = 201, description = "Routine created", body = RoutineIdDto),
        (status = 400, description = "Invalid routine data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_routine(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoutineDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateRoutineParams::from_dto(user.id, payload)?;

    let routine = RoutineService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(RoutineIdDto {
            routine_id: routine.id,
        }),
    ))
}

/// List the logged-in user's routines scheduled on a date.
///
/// # Returns
/// - `200 OK` - Routines repeating on that weekday with their completion state
/// - `400 Bad Request` - Malformed date
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/routines",
    tag = ROUTINE_TAG,
    params(RoutineDateParams),
    responses(
        (status = 200, description = "Routines for the date", body = RoutinesForDateDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_routines(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RoutineDateParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let routines = RoutineService::new(&state.db)
        .get_for_date(user.id, params.date)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RoutinesForDateDto {
            date: params.date,
            routines: routines.into_iter().map(RoutineForDate::into_dto).collect(),
        }),
    ))
}

/// Mark a routine as done or not done on a date.
///
/// # Returns
/// - `204 No Content` - Completion recorded
/// - `400 Bad Request` - The routine does not repeat on that date (43202)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Routine missing or owned by someone else (43201)
#[utoipa::path(
    put,
    path = "/api/routines/{routine_id}/completion",
    tag = ROUTINE_TAG,
    params(
        ("routine_id" = i32, Path, description = "Routine id")
    ),
    request_body = RoutineCompletionDto,
    responses(
        (status = 204, description = "Completion recorded"),
        (status = 400, description = "Routine not scheduled on the date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Routine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_completion(
    State(state): State<AppState>,
    session: Session,
    Path(routine_id): Path<i32>,
    Json(payload): Json<RoutineCompletionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    RoutineService::new(&state.db)
        .set_completion(user.id, routine_id, payload.date, payload.is_completed)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a routine of the logged-in user.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Routine missing or owned by someone else (43201)
#[utoipa::path(
    delete,
    path = "/api/routines/{routine_id}",
    tag = ROUTINE_TAG,
    params(
        ("routine_id" = i32, Path, description = "Routine id")
    ),
    responses(
        (status = 204, description = "Routine deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Routine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_routine(
    State(state): State<AppState>,
    session: Session,
    Path(routine_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    RoutineService::new(&state.db)
        .delete(user.id, routine_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        diary::{CreateDiaryDto, DiaryDto, DiaryIdDto},
    },
    server::{
        controller::YearMonthParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::diary::{CreateDiaryParams, Diary},
        service::diary::DiaryService,
        state::AppState,
        util::date::MonthRange,
    },
};

/// Tag for grouping diary endpoints in OpenAPI documentation
pub static DIARY_TAG: &str = "diary";

/// Write the diary for a date.
///
/// # Returns
/// - `201 Created` - Id of the new diary
/// - `400 Bad Request` - Title, memo or image list too long
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - A diary already exists for that date (44101)
#[utoipa::path(
    post,
    path = "/api/diaries",
    tag = DIARY_TAG,
    request_body = CreateDiaryDto,
    responses(
        (status = 201, description = "Diary created", body = DiaryIdDto),
        (status = 400, description = "Invalid diary data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Diary already exists for the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_diary(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDiaryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateDiaryParams::from_dto(user.id, payload)?;

    let diary_id = DiaryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(DiaryIdDto { diary_id })))
}

/// List the logged-in user's diaries in a month.
///
/// # Returns
/// - `200 OK` - Diaries ordered by date
/// - `400 Bad Request` - `yearMonth` is not `YYYY-MM`
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/diaries",
    tag = DIARY_TAG,
    params(YearMonthParams),
    responses(
        (status = 200, description = "Monthly diaries", body = Vec<DiaryDto>),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_diaries(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<YearMonthParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let month = MonthRange::parse(&params.year_month)?;

    let diaries = DiaryService::new(&state.db)
        .get_monthly(user.id, month)
        .await?;

    Ok((
        StatusCode::OK,
        Json(diaries.into_iter().map(Diary::into_dto).collect::<Vec<_>>()),
    ))
}

/// Delete a diary of the logged-in user.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Diary missing or owned by someone else (44102)
#[utoipa::path(
    delete,
    path = "/api/diaries/{diary_id}",
    tag = DIARY_TAG,
    params(
        ("diary_id" = i32, Path, description = "Diary id")
    ),
    responses(
        (status = 204, description = "Diary deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Diary not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_diary(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    DiaryService::new(&state.db).delete(user.id, diary_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

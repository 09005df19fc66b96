use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        concentration::{ConcentrationDto, SaveConcentrationDto},
    },
    server::{
        controller::YearMonthParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::concentration::{Concentration, SaveConcentrationParams},
        service::concentration::ConcentrationService,
        state::AppState,
        util::date::MonthRange,
    },
};

/// Tag for grouping concentration endpoints in OpenAPI documentation
pub static CONCENTRATION_TAG: &str = "concentration";

/// Record a focus session.
///
/// Sessions on the same date add up: target count and time accumulate while the
/// setting count is replaced by the latest value.
///
/// # Returns
/// - `200 OK` - The day's updated record
/// - `400 Bad Request` - Negative values or target count above setting count
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/concentrations",
    tag = CONCENTRATION_TAG,
    request_body = SaveConcentrationDto,
    responses(
        (status = 200, description = "Updated record", body = ConcentrationDto),
        (status = 400, description = "Invalid concentration data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_concentration(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveConcentrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = SaveConcentrationParams::from_dto(user.id, payload)?;

    let record = ConcentrationService::new(&state.db).save(params).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// List the logged-in user's focus records in a month.
///
/// # Returns
/// - `200 OK` - Records ordered by date
/// - `400 Bad Request` - `yearMonth` is not `YYYY-MM`
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/concentrations",
    tag = CONCENTRATION_TAG,
    params(YearMonthParams),
    responses(
        (status = 200, description = "Monthly records", body = Vec<ConcentrationDto>),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_concentrations(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<YearMonthParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let month = MonthRange::parse(&params.year_month)?;

    let records = ConcentrationService::new(&state.db)
        .get_monthly(user.id, month)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            records
                .into_iter()
                .map(Concentration::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

//! HTTP request handlers.
//!
//! Every handler authenticates through `AuthGuard` (except registration and dev login),
//! converts request DTOs into validated params, calls one service and converts the
//! result back into a DTO. Handlers carry `utoipa::path` annotations that feed the
//! OpenAPI document served at `/api/docs`.

pub mod auth;
pub mod comment;
pub mod concentration;
pub mod diary;
pub mod like;
pub mod profile;
pub mod routine;
pub mod schedule;
pub mod social;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

/// Cursor query parameters shared by paginated listings.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CursorParams {
    /// Id of the last item of the previous page; omit for the first page.
    pub cursor: Option<i32>,
    /// Page size, defaults to 10. Must be positive.
    pub limit: Option<i64>,
}

/// `yearMonth` query parameter of monthly listings.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct YearMonthParams {
    /// Month formatted as `YYYY-MM`.
    pub year_month: String,
}

//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every service and controller. Business
//! rule violations carry an [`ErrorCode`](code::ErrorCode) from the catalog and render
//! with its status and numeric code; infrastructure failures are logged and reported
//! as a generic 500.

pub mod auth;
pub mod code;
pub mod config;
pub mod pagination;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, code::ErrorCode, config::ConfigError, pagination::PaginationError,
    },
};

/// Numeric code for request validation failures.
const VALIDATION_CODE: u32 = 40000;
/// Numeric code for rejected pagination parameters.
const PAGINATION_CODE: u32 = 40001;
/// Numeric code for unexpected server failures.
const INTERNAL_CODE: u32 = 50000;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure, delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Invalid pagination input. Results in 400 Bad Request.
    #[error(transparent)]
    PaginationErr(#[from] PaginationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Business rule violation from the error-code catalog.
    #[error("{}", .0.message())]
    Domain(ErrorCode),

    /// Request payload failed validation. Results in 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client sees a generic body.
    #[error("{0}")]
    InternalError(String),
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        AppError::Domain(code)
    }
}

impl AppError {
    /// Shorthand for building a validation error from anything displayable.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Catalog status and code - For `Domain`
/// - 400 Bad Request - For `Validation` (40000) and `PaginationErr` (40001)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Domain(code) => (
                code.status(),
                Json(ErrorDto {
                    code: code.code(),
                    error: code.message().to_string(),
                }),
            )
                .into_response(),
            Self::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    code: VALIDATION_CODE,
                    error: msg,
                }),
            )
                .into_response(),
            Self::PaginationErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    code: PAGINATION_CODE,
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wraps any displayable error into a logged 500 response with a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                code: INTERNAL_CODE,
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_use_catalog_status() {
        let response = AppError::from(ErrorCode::NotFoundSocialBoard).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::from(ErrorCode::ExistsFollow).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn pagination_errors_are_bad_requests() {
        let response = AppError::from(PaginationError::NonPositiveLimit(0)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_are_hidden_behind_500() {
        let response =
            AppError::from(sea_orm::DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_errors_are_unauthorized() {
        let response = AppError::from(AuthError::UserNotInSession).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::code::ErrorCode};

/// Numeric code reported for every authentication failure.
const UNAUTHENTICATED_CODE: u32 = 40103;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session refers to a user that no longer exists.
    #[error("User {0} in session was not found in database")]
    UserNotInDatabase(i32),

    /// Development login was requested while it is disabled.
    #[error("Development login is disabled")]
    DevLoginDisabled,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants return 401 Unauthorized with a generic message except a disabled dev
/// login, which pretends the route does not exist. Details are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    code: UNAUTHENTICATED_CODE,
                    error: "Login required".to_string(),
                }),
            )
                .into_response(),
            Self::DevLoginDisabled => {
                let code = ErrorCode::NotFoundResource;
                (
                    code.status(),
                    Json(ErrorDto {
                        code: code.code(),
                        error: code.message().to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

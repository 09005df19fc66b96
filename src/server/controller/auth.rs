use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{DevLoginDto, UserDto},
    },
    server::{
        error::{auth::AuthError, code::ErrorCode, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as an existing user without an identity provider.
///
/// Only available when the server runs with `DEV_LOGIN=true`; otherwise the route
/// answers like an unknown path. Replaces any previous session data.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session that receives the user id
/// - `payload` - Login id of the user to impersonate
///
/// # Returns
/// - `200 OK` - Logged in, returns the user
/// - `404 Not Found` - Dev login disabled or unknown login id
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = DevLoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 404, description = "Dev login disabled or unknown login id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dev_login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DevLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if !state.dev_login {
        return Err(AuthError::DevLoginDisabled.into());
    }

    let user = UserService::new(&state.db)
        .find_by_login_id(&payload.login_id)
        .await?
        .ok_or(ErrorCode::NotFoundUser)?;

    let auth_session = AuthSession::new(&session);
    auth_session.clear().await;
    auth_session.set_user_id(user.id).await?;

    tracing::info!(user_id = user.id, "Dev login");

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current user by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The user in session
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

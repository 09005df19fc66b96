use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{RegisterUserDto, UpdateNicknameDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::RegisterUserParams,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Identity verification happens upstream; this endpoint only records the account.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Nickname (1-20 characters) and login id (4-30 letters or digits)
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid nickname or login id
/// - `409 Conflict` - Login id (40113) or nickname (40117) already in use
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Login id or nickname already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Change the nickname of the logged-in user.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Nickname is not 1-20 characters
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Nickname taken by another user
#[utoipa::path(
    patch,
    path = "/api/users/me/nickname",
    tag = USER_TAG,
    request_body = UpdateNicknameDto,
    responses(
        (status = 200, description = "Nickname updated", body = UserDto),
        (status = 400, description = "Invalid nickname", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Nickname already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_nickname(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateNicknameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let user = UserService::new(&state.db)
        .update_nickname(user.id, payload.nickname)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto, pagination::CursorPageDto, profile::ProfileDto, routine::PublicRoutineDto,
        social::SocialDto,
    },
    server::{
        controller::CursorParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{pagination::PageLimit, routine::Routine, social::SocialSummary},
        service::{follow::FollowService, profile::ProfileService, routine::RoutineService},
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get a user's profile.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `user_id` - Profile owner
///
/// # Returns
/// - `200 OK` - Nickname, follow counts, post count and whether it is the viewer's own profile
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown user (40201)
#[utoipa::path(
    get,
    path = "/api/profiles/{user_id}",
    tag = PROFILE_TAG,
    params(
        ("user_id" = i32, Path, description = "Profile owner id")
    ),
    responses(
        (status = 200, description = "Profile", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require_user().await?;

    let profile = ProfileService::new(&state.db)
        .get_profile(user_id, viewer.id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Page through the posts of a user, newest first.
///
/// # Returns
/// - `200 OK` - One page of posts
/// - `400 Bad Request` - Non-positive limit (40001)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown user (40201)
#[utoipa::path(
    get,
    path = "/api/profiles/{user_id}/socials",
    tag = PROFILE_TAG,
    params(
        ("user_id" = i32, Path, description = "Profile owner id"),
        CursorParams
    ),
    responses(
        (status = 200, description = "Posts page", body = CursorPageDto<SocialDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_socials(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Query(params): Query<CursorParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require_user().await?;

    let limit = PageLimit::from_query(params.limit)?;

    let page = ProfileService::new(&state.db)
        .get_user_socials(user_id, viewer.id, params.cursor, limit)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(SocialSummary::into_dto))))
}

/// Get the public routines of a user.
///
/// # Returns
/// - `200 OK` - Public routines, timed ones first
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown user (40201)
#[utoipa::path(
    get,
    path = "/api/profiles/{user_id}/routines",
    tag = PROFILE_TAG,
    params(
        ("user_id" = i32, Path, description = "Profile owner id")
    ),
    responses(
        (status = 200, description = "Public routines", body = Vec<PublicRoutineDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_routines(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;

    let routines = RoutineService::new(&state.db).get_public(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            routines
                .into_iter()
                .map(Routine::into_public_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Follow a user.
///
/// # Returns
/// - `204 No Content` - Now following
/// - `400 Bad Request` - Tried to follow yourself (40412)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown user (40201)
/// - `409 Conflict` - Already following (40413)
#[utoipa::path(
    post,
    path = "/api/profiles/{user_id}/follow",
    tag = PROFILE_TAG,
    params(
        ("user_id" = i32, Path, description = "User to follow")
    ),
    responses(
        (status = 204, description = "Followed"),
        (status = 400, description = "Cannot follow yourself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Already following", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    FollowService::new(&state.db).follow(user.id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Stop following a user.
///
/// # Returns
/// - `204 No Content` - No longer following
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown user (40201) or not following (40414)
#[utoipa::path(
    delete,
    path = "/api/profiles/{user_id}/follow",
    tag = PROFILE_TAG,
    params(
        ("user_id" = i32, Path, description = "User to unfollow")
    ),
    responses(
        (status = 204, description = "Unfollowed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User or follow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfollow(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    FollowService::new(&state.db)
        .unfollow(user.id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        social::{CommentLikeIdDto, SocialLikeIdDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::like::LikeService, state::AppState,
    },
};

/// Tag for grouping like endpoints in OpenAPI documentation
pub static LIKE_TAG: &str = "like";

/// Like a post.
///
/// # Returns
/// - `201 Created` - Id of the like
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Post missing or deleted (40401)
/// - `409 Conflict` - Already liked (40407)
#[utoipa::path(
    post,
    path = "/api/socials/{social_id}/likes",
    tag = LIKE_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 201, description = "Post liked", body = SocialLikeIdDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Already liked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_social(
    State(state): State<AppState>,
    session: Session,
    Path(social_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let social_like_id = LikeService::new(&state.db)
        .like_social(user.id, social_id)
        .await?;

    Ok((StatusCode::CREATED, Json(SocialLikeIdDto { social_like_id })))
}

/// Remove the logged-in user's like from a post.
///
/// # Returns
/// - `204 No Content` - Like removed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Post missing (40401) or not liked (40408)
#[utoipa::path(
    delete,
    path = "/api/socials/{social_id}/likes",
    tag = LIKE_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Like removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post or like not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlike_social(
    State(state): State<AppState>,
    session: Session,
    Path(social_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    LikeService::new(&state.db)
        .unlike_social(user.id, social_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like a comment.
///
/// # Returns
/// - `201 Created` - Id of the like
/// - `400 Bad Request` - Comment belongs to another post (40406)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Post or comment missing
/// - `409 Conflict` - Already liked (40407)
#[utoipa::path(
    post,
    path = "/api/socials/{social_id}/comments/{comment_id}/likes",
    tag = LIKE_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id"),
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 201, description = "Comment liked", body = CommentLikeIdDto),
        (status = 400, description = "Comment does not belong to the post", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post or comment not found", body = ErrorDto),
        (status = 409, description = "Already liked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_comment(
    State(state): State<AppState>,
    session: Session,
    Path((social_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let comment_like_id = LikeService::new(&state.db)
        .like_comment(user.id, social_id, comment_id)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentLikeIdDto { comment_like_id })))
}

/// Remove the logged-in user's like from a comment.
///
/// # Returns
/// - `204 No Content` - Like removed
/// - `400 Bad Request` - Comment belongs to another post (40406)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Post, comment or like missing
#[utoipa::path(
    delete,
    path = "/api/socials/{social_id}/comments/{comment_id}/likes",
    tag = LIKE_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id"),
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Like removed"),
        (status = 400, description = "Comment does not belong to the post", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post, comment or like not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlike_comment(
    State(state): State<AppState>,
    session: Session,
    Path((social_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    LikeService::new(&state.db)
        .unlike_comment(user.id, social_id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

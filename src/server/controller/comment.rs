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
        social::{CommentIdDto, CreateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::comment::CreateCommentParams,
        service::comment::CommentService, state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Comment on a post.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `social_id` - Post to comment on
/// - `payload` - Comment content
///
/// # Returns
/// - `201 Created` - Id of the new comment
/// - `400 Bad Request` - Empty content or longer than 250 characters
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Post missing or deleted (40401)
#[utoipa::path(
    post,
    path = "/api/socials/{social_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentIdDto),
        (status = 400, description = "Invalid content", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(social_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateCommentParams::from_dto(social_id, user.id, payload)?;

    let comment_id = CommentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(CommentIdDto { comment_id })))
}

/// Delete a comment written by the logged-in user.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Comment belongs to another post (40406)
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Written by someone else (40405)
/// - `404 Not Found` - Post (40401) or comment (40404) missing
#[utoipa::path(
    delete,
    path = "/api/socials/{social_id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id"),
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Comment does not belong to the post", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post or comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path((social_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    CommentService::new(&state.db)
        .delete(user.id, social_id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

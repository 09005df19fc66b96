use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        pagination::CursorPageDto,
        social::{CreateSocialDto, SocialCategoryDto, SocialDetailDto, SocialDto, SocialIdDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::PageLimit,
            social::{CreateSocialParams, SocialCategory, SocialScope, SocialSummary},
        },
        service::social::SocialService,
        state::AppState,
    },
};

/// Tag for grouping social endpoints in OpenAPI documentation
pub static SOCIAL_TAG: &str = "social";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct FeedParams {
    /// Id of the last post of the previous page; omit for the first page.
    pub cursor: Option<i32>,
    /// Page size, defaults to 10. Must be positive.
    pub limit: Option<i64>,
    /// Comma-separated category ids, e.g. `1,3`. Omit for every category.
    pub category_ids: Option<String>,
}

impl FeedParams {
    fn scope(&self) -> Result<SocialScope, AppError> {
        let Some(raw) = self.category_ids.as_deref().filter(|raw| !raw.trim().is_empty()) else {
            return Ok(SocialScope::All);
        };

        let ids = raw
            .split(',')
            .map(|id| id.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| AppError::validation("categoryIds must be comma-separated integers"))?;

        Ok(SocialScope::Categories(ids))
    }
}

/// List all post categories.
///
/// # Returns
/// - `200 OK` - Categories ordered by id
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/socials/categories",
    tag = SOCIAL_TAG,
    responses(
        (status = 200, description = "Categories", body = Vec<SocialCategoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;

    let categories = SocialService::new(&state.db).get_categories().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(SocialCategory::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a post.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Content, anonymity flag, categories, image URLs and optional routine
///
/// # Returns
/// - `201 Created` - Id of the new post
/// - `400 Bad Request` - Invalid content, too many images or no category (40411)
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown category (40403) or routine (43201)
#[utoipa::path(
    post,
    path = "/api/socials",
    tag = SOCIAL_TAG,
    request_body = CreateSocialDto,
    responses(
        (status = 201, description = "Post created", body = SocialIdDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Category or routine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_social(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSocialDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateSocialParams::from_dto(user.id, payload)?;

    let social_id = SocialService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(SocialIdDto { social_id })))
}

/// Get a page of the global feed.
///
/// Posts are ordered newest first by id. Pass the returned `nextCursor` as `cursor` to
/// continue; it is absent once the feed is exhausted.
///
/// # Returns
/// - `200 OK` - One feed page
/// - `400 Bad Request` - Non-positive limit (40001) or malformed category ids
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/socials",
    tag = SOCIAL_TAG,
    params(FeedParams),
    responses(
        (status = 200, description = "Feed page", body = CursorPageDto<SocialDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feed(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<FeedParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let limit = PageLimit::from_query(params.limit)?;
    let scope = params.scope()?;

    let page = SocialService::new(&state.db)
        .get_feed(user.id, scope, params.cursor, limit)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(SocialSummary::into_dto))))
}

/// Get a single post with its comments.
///
/// # Returns
/// - `200 OK` - The post
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Post missing or deleted (40401)
#[utoipa::path(
    get,
    path = "/api/socials/{social_id}",
    tag = SOCIAL_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post detail", body = SocialDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_social(
    State(state): State<AppState>,
    session: Session,
    Path(social_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let detail = SocialService::new(&state.db)
        .get_detail(user.id, social_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Delete a post written by the logged-in user.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Written by someone else (40402)
/// - `404 Not Found` - Post missing or deleted (40401)
#[utoipa::path(
    delete,
    path = "/api/socials/{social_id}",
    tag = SOCIAL_TAG,
    params(
        ("social_id" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_social(
    State(state): State<AppState>,
    session: Session,
    Path(social_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    SocialService::new(&state.db)
        .delete(user.id, social_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, comment, concentration, diary, like, profile, routine, schedule, social, user,
    },
    error::{code::ErrorCode, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "toduck", description = "Routine, diary and social feed API"),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "Account registration and settings"),
        (name = "social", description = "Posts and the social feed"),
        (name = "comment", description = "Comments on posts"),
        (name = "like", description = "Post and comment likes"),
        (name = "profile", description = "User profiles and follows"),
        (name = "routine", description = "Repeating routines"),
        (name = "schedule", description = "Dated schedules and their occurrences"),
        (name = "concentration", description = "Focus session records"),
        (name = "diary", description = "Daily diaries")
    )
)]
struct ApiDoc;

/// Builds the API router together with its Swagger UI at `/api/docs`.
///
/// Unknown paths answer with `49901` and unsupported methods with `49902`, using the
/// same error body as every other failure.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::dev_login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::register))
        .routes(routes!(user::update_nickname))
        .routes(routes!(social::get_categories))
        .routes(routes!(social::get_feed, social::create_social))
        .routes(routes!(social::get_social, social::delete_social))
        .routes(routes!(comment::create_comment))
        .routes(routes!(comment::delete_comment))
        .routes(routes!(like::like_social, like::unlike_social))
        .routes(routes!(like::like_comment, like::unlike_comment))
        .routes(routes!(profile::get_profile))
        .routes(routes!(profile::get_user_socials))
        .routes(routes!(profile::get_user_routines))
        .routes(routes!(profile::follow, profile::unfollow))
        .routes(routes!(routine::get_routines, routine::create_routine))
        .routes(routes!(routine::set_completion))
        .routes(routes!(routine::delete_routine))
        .routes(routes!(schedule::get_schedules, schedule::create_schedule))
        .routes(routes!(schedule::get_schedule_record))
        .routes(routes!(schedule::set_completion))
        .routes(routes!(schedule::delete_occurrence))
        .routes(routes!(schedule::delete_schedule))
        .routes(routes!(
            concentration::get_monthly_concentrations,
            concentration::save_concentration
        ))
        .routes(routes!(diary::get_monthly_diaries, diary::create_diary))
        .routes(routes!(diary::delete_diary))
}

async fn not_found() -> AppError {
    ErrorCode::NotFoundResource.into()
}

async fn method_not_allowed() -> AppError {
    ErrorCode::MethodForbidden.into()
}

#[cfg(test)]
mod tests {
    use utoipa::openapi::PathItem;

    use super::*;

    fn path<'a>(api: &'a utoipa::openapi::OpenApi, path: &str) -> &'a PathItem {
        api.paths
            .paths
            .get(path)
            .unwrap_or_else(|| panic!("missing path {path}"))
    }

    /// Tests that every endpoint is registered in the OpenAPI document.
    ///
    /// Expected: Each path lists the methods its handlers serve
    #[test]
    fn documents_every_endpoint() {
        let (_, api) = api_router().split_for_parts();

        let feed = path(&api, "/api/socials");
        assert!(feed.get.is_some());
        assert!(feed.post.is_some());

        let social = path(&api, "/api/socials/{social_id}");
        assert!(social.get.is_some());
        assert!(social.delete.is_some());

        let likes = path(&api, "/api/socials/{social_id}/comments/{comment_id}/likes");
        assert!(likes.post.is_some());
        assert!(likes.delete.is_some());

        let follow = path(&api, "/api/profiles/{user_id}/follow");
        assert!(follow.post.is_some());
        assert!(follow.delete.is_some());

        assert!(path(&api, "/api/routines/{routine_id}/completion").put.is_some());
        let schedules = path(&api, "/api/schedules");
        assert!(schedules.get.is_some());
        assert!(schedules.post.is_some());
        assert!(path(&api, "/api/schedules/{schedule_id}").delete.is_some());
        assert!(path(&api, "/api/schedules/{schedule_id}/completion").put.is_some());
        assert!(path(&api, "/api/schedules/{schedule_id}/occurrences").delete.is_some());
        assert!(path(&api, "/api/schedule-records/{record_id}").get.is_some());
        assert!(path(&api, "/api/concentrations").get.is_some());
        assert!(path(&api, "/api/diaries/{diary_id}").delete.is_some());
        assert!(path(&api, "/api/auth/login").post.is_some());
        assert!(path(&api, "/api/users/me/nickname").patch.is_some());
    }

    /// Tests that the declared tags cover the tags used by handlers.
    ///
    /// Expected: Ten tags are documented
    #[test]
    fn documents_tags() {
        let api = ApiDoc::openapi();

        let tags = api.tags.unwrap_or_default();
        assert_eq!(tags.len(), 10);
        assert!(tags.iter().any(|tag| tag.name == schedule::SCHEDULE_TAG));
        assert!(tags.iter().any(|tag| tag.name == social::SOCIAL_TAG));
    }
}

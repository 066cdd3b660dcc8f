// src/presentation/http/controllers/engagement.rs
use crate::application::{
    commands::engagement::{AddCommentCommand, ToggleLikeCommand},
    dto::{CommentDto, LikeStateDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub content: String,
    /// Present when replying to a top-level comment.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/like",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Like state after the toggle.", body = crate::application::dto::LikeStateDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Engagement"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeStateDto>> {
    state
        .services
        .engagement_commands
        .toggle_like(&user, ToggleLikeCommand { article_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Approved comments with their replies.", body = [crate::application::dto::CommentDto]),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Engagement"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .engagement_queries
        .list_comments(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment recorded.", body = crate::application::dto::CommentDto),
        (status = 400, description = "Bad content or reply target.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Engagement"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = AddCommentCommand {
        article_id: id,
        content: payload.content,
        parent_id: payload.parent_id,
    };

    state
        .services
        .engagement_commands
        .add_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

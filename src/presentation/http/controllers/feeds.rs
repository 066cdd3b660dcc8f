// src/presentation/http/controllers/feeds.rs
use crate::application::{
    dto::{ArticleDto, NewsletterDto},
    queries::{articles::ArticleFeedQuery, newsletters::NewsletterFeedQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

/// Exactly one of the two targets must be given.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FeedParams {
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub journalist_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/feeds/articles",
    params(FeedParams),
    responses(
        (status = 200, description = "Published articles from the targeted source, newest first.", body = [crate::application::dto::ArticleDto]),
        (status = 400, description = "Zero or two targets given, or target is not a journalist.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Target not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Feeds"
)]
pub async fn article_feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .article_feed(
            &user,
            ArticleFeedQuery {
                publisher_id: params.publisher_id,
                journalist_id: params.journalist_id,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/feeds/newsletters",
    params(FeedParams),
    responses(
        (status = 200, description = "Newsletters from the targeted source, newest first.", body = [crate::application::dto::NewsletterDto]),
        (status = 400, description = "Zero or two targets given, or target is not a journalist.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Target not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Feeds"
)]
pub async fn newsletter_feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<Vec<NewsletterDto>>> {
    state
        .services
        .newsletter_queries
        .newsletter_feed(
            &user,
            NewsletterFeedQuery {
                publisher_id: params.publisher_id,
                journalist_id: params.journalist_id,
            },
        )
        .await
        .into_http()
        .map(Json)
}

// src/presentation/http/controllers/newsletters.rs
use crate::application::{commands::newsletters::CreateNewsletterCommand, dto::NewsletterDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNewsletterRequest {
    pub title: String,
    pub content: String,
    /// One of `daily`, `weekly`, `monthly`, `special`.
    pub frequency: String,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub featured_article_ids: Vec<i64>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletters",
    request_body = CreateNewsletterRequest,
    responses(
        (status = 200, description = "Newsletter created.", body = crate::application::dto::NewsletterDto),
        (status = 400, description = "Bad frequency or unpublished featured article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing capability or publisher outside affiliations.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Newsletters"
)]
pub async fn create_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateNewsletterRequest>,
) -> HttpResult<Json<NewsletterDto>> {
    let command = CreateNewsletterCommand {
        title: payload.title,
        content: payload.content,
        frequency: payload.frequency,
        publisher_id: payload.publisher_id,
        featured_article_ids: payload.featured_article_ids,
        scheduled_for: payload.scheduled_for,
    };

    state
        .services
        .newsletter_commands
        .create_newsletter(&user, command)
        .await
        .into_http()
        .map(Json)
}

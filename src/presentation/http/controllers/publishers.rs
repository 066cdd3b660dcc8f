// src/presentation/http/controllers/publishers.rs
use crate::application::{
    commands::publishers::{AddAffiliationCommand, CreatePublisherCommand},
    dto::PublisherDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublisherRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AffiliationRequest {
    pub user_id: i64,
    /// `editor` or `journalist`.
    pub kind: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers",
    responses(
        (status = 200, description = "Active publishers with subscriber counts.", body = [crate::application::dto::PublisherDto])
    ),
    tag = "Publishers"
)]
pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublisherDto>>> {
    state
        .services
        .publisher_queries
        .list_publishers()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/publishers",
    request_body = CreatePublisherRequest,
    responses(
        (status = 200, description = "Publisher created.", body = crate::application::dto::PublisherDto),
        (status = 400, description = "Validation failure.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing capability.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Publishers"
)]
pub async fn create_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePublisherRequest>,
) -> HttpResult<Json<PublisherDto>> {
    let command = CreatePublisherCommand {
        name: payload.name,
        description: payload.description,
        website: payload.website,
    };

    state
        .services
        .publisher_commands
        .create_publisher(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/publishers/{id}/affiliations",
    params(("id" = i64, Path, description = "Publisher identifier")),
    request_body = AffiliationRequest,
    responses(
        (status = 200, description = "Affiliation recorded.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 400, description = "Kind does not match the user's role.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Publisher or user not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Publishers"
)]
pub async fn add_affiliation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AffiliationRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let command = AddAffiliationCommand {
        publisher_id: id,
        user_id: payload.user_id,
        kind: payload.kind,
    };

    state
        .services
        .publisher_commands
        .add_affiliation(&user, command)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "affiliated" })))
}

// src/presentation/http/controllers/approvals.rs
use crate::application::{
    commands::articles::TransitionArticleCommand,
    dto::ArticleDto,
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApprovalDecisionRequest {
    pub article_id: i64,
    /// `approve` or `reject`; anything else is answered with a warning.
    pub action: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApprovalDecisionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/approvals",
    responses(
        (status = 200, description = "Submitted articles awaiting review on the caller's desks.", body = [crate::application::dto::ArticleDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing capability.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Approvals"
)]
pub async fn approval_queue(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .approval_queue(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/approvals",
    request_body = ApprovalDecisionRequest,
    responses(
        (status = 200, description = "Decision applied, or a warning for an unknown action.", body = ApprovalDecisionResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article is not awaiting review.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Approvals"
)]
pub async fn decide_approval(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ApprovalDecisionRequest>,
) -> HttpResult<Json<ApprovalDecisionResponse>> {
    let status = match payload.action.as_str() {
        "approve" => ArticleStatus::Published,
        "reject" => ArticleStatus::Rejected,
        other => {
            return Ok(Json(ApprovalDecisionResponse {
                article: None,
                warning: Some(format!("unknown approval action '{other}'")),
            }));
        }
    };

    let article = state
        .services
        .article_commands
        .transition_article(
            &user,
            TransitionArticleCommand {
                id: payload.article_id,
                status,
            },
        )
        .await
        .into_http()?;

    Ok(Json(ApprovalDecisionResponse {
        article: Some(article),
        warning: None,
    }))
}

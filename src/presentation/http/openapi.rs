// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CursorPage};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::provision_user,
        crate::presentation::http::controllers::users::set_user_role,
        crate::presentation::http::controllers::users::profile,
        crate::presentation::http::controllers::users::list_journalists,
        crate::presentation::http::controllers::publishers::list_publishers,
        crate::presentation::http::controllers::publishers::create_publisher,
        crate::presentation::http::controllers::publishers::add_affiliation,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::transition_article,
        crate::presentation::http::controllers::approvals::approval_queue,
        crate::presentation::http::controllers::approvals::decide_approval,
        crate::presentation::http::controllers::engagement::toggle_like,
        crate::presentation::http::controllers::engagement::list_comments,
        crate::presentation::http::controllers::engagement::add_comment,
        crate::presentation::http::controllers::subscriptions::my_subscriptions,
        crate::presentation::http::controllers::subscriptions::change_subscription,
        crate::presentation::http::controllers::feeds::article_feed,
        crate::presentation::http::controllers::feeds::newsletter_feed,
        crate::presentation::http::controllers::newsletters::create_newsletter,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::users::ProvisionUserRequest,
            crate::presentation::http::controllers::users::RoleChangeRequest,
            crate::presentation::http::controllers::publishers::CreatePublisherRequest,
            crate::presentation::http::controllers::publishers::AffiliationRequest,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::TransitionRequest,
            crate::presentation::http::controllers::approvals::ApprovalDecisionRequest,
            crate::presentation::http::controllers::approvals::ApprovalDecisionResponse,
            crate::presentation::http::controllers::engagement::CommentRequest,
            crate::presentation::http::controllers::subscriptions::SubscriptionChangeRequest,
            crate::presentation::http::controllers::newsletters::CreateNewsletterRequest,
            crate::domain::article::ArticleStatus,
            crate::domain::user::Role,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::LikeStateDto,
            crate::application::dto::NewsletterDto,
            crate::application::dto::PublisherDto,
            crate::application::dto::SubscriptionsDto,
            crate::application::dto::SubscriptionChangeDto,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::ProvisionedUserDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::JournalistDto
        )
    ),
    tags(
        (name = "Users", description = "Provisioning, profiles and the journalist directory"),
        (name = "Publishers", description = "Publisher directory and affiliations"),
        (name = "Articles", description = "Article authoring and lifecycle endpoints"),
        (name = "Approvals", description = "Editorial review queue"),
        (name = "Engagement", description = "Likes and comments"),
        (name = "Subscriptions", description = "Publisher and journalist subscriptions"),
        (name = "Feeds", description = "Per-source article and newsletter feeds"),
        (name = "Newsletters", description = "Newsletter authoring"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Newsroom API",
        description = "Role-based news publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("opaque".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            if let Ok(url) = env::var("PUBLIC_API_URL") {
                let sanitized = url.trim().trim_end_matches('/').to_string();
                if !sanitized.is_empty() {
                    urls.push(sanitized);
                }
            }
        }

        if !urls.iter().any(|url| url == "http://localhost:3000") {
            urls.push("http://localhost:3000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").config(Config::new(["/openapi.json"]));
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

impl From<CursorPage<ArticleDto>> for ArticleListResponse {
    fn from(page: CursorPage<ArticleDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

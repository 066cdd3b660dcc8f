// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{
        approvals, articles, engagement, feeds, newsletters, publishers, subscriptions, users,
    },
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/users", post(users::provision_user))
        .route("/api/v1/users/{id}/role", post(users::set_user_role))
        .route("/api/v1/auth/me", get(users::profile))
        .route("/api/v1/journalists", get(users::list_journalists))
        .route(
            "/api/v1/publishers",
            get(publishers::list_publishers).post(publishers::create_publisher),
        )
        .route(
            "/api/v1/publishers/{id}/affiliations",
            post(publishers::add_affiliation),
        )
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            put(articles::update_article).delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/transition",
            post(articles::transition_article),
        )
        .route("/api/v1/articles/{id}/like", post(engagement::toggle_like))
        .route(
            "/api/v1/articles/{id}/comments",
            get(engagement::list_comments).post(engagement::add_comment),
        )
        .route(
            "/api/v1/approvals",
            get(approvals::approval_queue).post(approvals::decide_approval),
        )
        .route(
            "/api/v1/subscriptions",
            get(subscriptions::my_subscriptions).post(subscriptions::change_subscription),
        )
        .route("/api/v1/feeds/articles", get(feeds::article_feed))
        .route("/api/v1/feeds/newsletters", get(feeds::newsletter_feed))
        .route("/api/v1/newsletters", post(newsletters::create_newsletter))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

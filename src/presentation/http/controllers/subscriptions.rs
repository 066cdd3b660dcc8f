// src/presentation/http/controllers/subscriptions.rs
use crate::application::{
    commands::subscriptions::ChangeSubscriptionCommand,
    dto::{SubscriptionChangeDto, SubscriptionsDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscriptionChangeRequest {
    /// `subscribe` or `unsubscribe`.
    pub action: String,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub journalist_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions",
    responses(
        (status = 200, description = "The caller's publisher and journalist subscriptions.", body = crate::application::dto::SubscriptionsDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn my_subscriptions(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<SubscriptionsDto>> {
    state
        .services
        .subscription_queries
        .my_subscriptions(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/subscriptions",
    request_body = SubscriptionChangeRequest,
    responses(
        (status = 200, description = "Subscription state after the change.", body = crate::application::dto::SubscriptionChangeDto),
        (status = 400, description = "Bad action or target.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Target not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn change_subscription(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SubscriptionChangeRequest>,
) -> HttpResult<Json<SubscriptionChangeDto>> {
    let command = ChangeSubscriptionCommand {
        publisher_id: payload.publisher_id,
        journalist_id: payload.journalist_id,
    };

    let result = match payload.action.as_str() {
        "subscribe" => {
            state
                .services
                .subscription_commands
                .subscribe(&user, command)
                .await
        }
        "unsubscribe" => {
            state
                .services
                .subscription_commands
                .unsubscribe(&user, command)
                .await
        }
        other => Err(ApplicationError::validation(format!(
            "unknown subscription action '{other}'"
        ))),
    };

    result.into_http().map(Json)
}

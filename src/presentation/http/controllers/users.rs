// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{ProvisionUserCommand, SetUserRoleCommand},
    dto::{JournalistDto, ProvisionedUserDto, UserDto, UserProfileDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProvisionUserRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Defaults to `reader` when omitted.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleChangeRequest {
    pub role: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = ProvisionUserRequest,
    responses(
        (status = 200, description = "Account created; the token in this response is shown exactly once.", body = crate::application::dto::ProvisionedUserDto),
        (status = 400, description = "Validation failure.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Username already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn provision_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ProvisionUserRequest>,
) -> HttpResult<Json<ProvisionedUserDto>> {
    let command = ProvisionUserCommand {
        username: payload.username,
        email: payload.email,
        role: payload.role,
    };

    state
        .services
        .user_commands
        .provision_user(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/role",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = RoleChangeRequest,
    responses(
        (status = 200, description = "User with the new role.", body = crate::application::dto::UserDto),
        (status = 400, description = "Unknown role.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn set_user_role(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<RoleChangeRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = SetUserRoleCommand {
        user_id: id,
        role: payload.role,
    };

    state
        .services
        .user_commands
        .set_user_role(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "The caller's profile with capabilities and counts.", body = crate::application::dto::UserProfileDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/journalists",
    responses(
        (status = 200, description = "Active journalists with article and follower counts.", body = [crate::application::dto::JournalistDto])
    ),
    tag = "Users"
)]
pub async fn list_journalists(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<JournalistDto>>> {
    state
        .services
        .user_queries
        .list_journalists()
        .await
        .into_http()
        .map(Json)
}

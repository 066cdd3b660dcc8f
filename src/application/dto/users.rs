// src/application/dto/users.rs
use crate::domain::user::{Capability, Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::auth::AuthenticatedUser;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            email: user.email.map(Into::into),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Returned once at provisioning; the token is not retrievable later.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProvisionedUserDto {
    pub user: UserDto,
    pub api_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CapabilityView {
    pub resource: String,
    pub action: String,
}

impl From<Capability> for CapabilityView {
    fn from(value: Capability) -> Self {
        Self {
            resource: value.resource,
            action: value.action,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub user: UserDto,
    pub capabilities: Vec<CapabilityView>,
    pub article_count: u64,
    pub follower_count: u64,
}

impl UserProfileDto {
    pub fn from_parts(
        user: User,
        auth: &AuthenticatedUser,
        article_count: u64,
        follower_count: u64,
    ) -> Self {
        let user_dto: UserDto = user.into();
        let mut capabilities: Vec<_> = auth
            .capabilities
            .iter()
            .cloned()
            .map(CapabilityView::from)
            .collect();
        capabilities.sort_by(|a, b| {
            a.resource
                .cmp(&b.resource)
                .then_with(|| a.action.cmp(&b.action))
        });

        Self {
            user: user_dto,
            capabilities,
            article_count,
            follower_count,
        }
    }
}

/// Directory entry readers browse when picking journalists to follow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalistDto {
    pub id: i64,
    pub username: String,
    pub article_count: u64,
    pub follower_count: u64,
}

impl JournalistDto {
    pub fn from_parts(user: User, article_count: u64, follower_count: u64) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            article_count,
            follower_count,
        }
    }
}

// src/infrastructure/security/api_token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::identity::IdentityResolver,
};
use crate::domain::user::UserRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Resolves bearer tokens against the `users.api_token` column.
///
/// Tokens are opaque strings minted at provisioning time; there is no
/// expiry or refresh, revocation happens by deactivating the account.
pub struct ApiTokenIdentityResolver {
    user_repo: Arc<dyn UserRepository>,
}

impl ApiTokenIdentityResolver {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl IdentityResolver for ApiTokenIdentityResolver {
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self
            .user_repo
            .find_by_api_token(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid API token"))?;

        if !user.is_active {
            return Err(ApplicationError::unauthorized("account disabled"));
        }

        Ok(AuthenticatedUser::from_user(&user))
    }
}

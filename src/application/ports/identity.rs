// src/application/ports/identity.rs
use crate::application::dto::AuthenticatedUser;
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Resolves an opaque bearer token to the acting user. Credential
/// issuance and rotation belong to the external identity collaborator;
/// this side only answers "who is calling".
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}

// src/application/queries/articles/queue.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::QueueScope,
};

impl ArticleQueryService {
    /// Submitted articles waiting for review, newest first. Editors see
    /// their desks; admins see everything.
    pub async fn approval_queue(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if !actor.has_capability("articles", "view:queue") {
            return Err(ApplicationError::forbidden(
                "missing capability articles:view:queue",
            ));
        }

        let scope = if actor.is_admin() {
            QueueScope::All
        } else {
            QueueScope::Managed(self.publisher_repo.managed_publisher_ids(actor.id).await?)
        };

        let records = self.read_repo.list_queue(&scope).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

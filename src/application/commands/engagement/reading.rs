// src/application/commands/engagement/reading.rs
use super::EngagementCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::article::ArticleId,
};

impl EngagementCommandService {
    /// Bookkeeping fired after a successful article detail read: bumps the
    /// view counter and, for signed-in readers, refreshes reading history.
    pub async fn note_view(
        &self,
        actor: Option<&AuthenticatedUser>,
        article_id: i64,
    ) -> ApplicationResult<()> {
        let article_id = ArticleId::new(article_id)?;
        self.article_write_repo.record_view(article_id).await?;

        if let Some(actor) = actor {
            self.engagement_repo
                .upsert_reading(actor.id, article_id, self.clock.now())
                .await?;
        }

        Ok(())
    }
}

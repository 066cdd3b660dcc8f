// src/application/commands/engagement/likes.rs
use super::{EngagementCommandService, guard::require_published_article};
use crate::application::commands::ensure_capability;
use crate::application::{
    dto::{AuthenticatedUser, LikeStateDto},
    error::ApplicationResult,
};

pub struct ToggleLikeCommand {
    pub article_id: i64,
}

impl EngagementCommandService {
    /// A first call likes, a second call unlikes. Returns the state the
    /// toggle left behind.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<LikeStateDto> {
        ensure_capability(actor, "likes", "toggle")?;
        let article =
            require_published_article(self.article_read_repo.as_ref(), command.article_id).await?;

        let liked = if self
            .engagement_repo
            .insert_like(article.id, actor.id)
            .await?
        {
            true
        } else {
            self.engagement_repo
                .delete_like(article.id, actor.id)
                .await?;
            false
        };

        let like_count = self.engagement_repo.like_count(article.id).await?;
        Ok(LikeStateDto { liked, like_count })
    }
}

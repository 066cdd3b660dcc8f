// src/application/commands/engagement/comments.rs
use super::{EngagementCommandService, guard::require_published_article};
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        engagement::{Comment, CommentId, NewComment},
    },
};

pub struct AddCommentCommand {
    pub article_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
}

impl EngagementCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_capability(actor, "comments", "create")?;
        let article =
            require_published_article(self.article_read_repo.as_ref(), command.article_id).await?;

        let parent_id = match command.parent_id {
            Some(parent_id) => Some(self.resolve_parent(parent_id, &article).await?.id),
            None => None,
        };

        let comment = NewComment::new(
            article.id,
            actor.id,
            parent_id,
            command.content,
            self.clock.now(),
        )?;
        let comment = self.engagement_repo.insert_comment(comment).await?;

        Ok(comment.into())
    }

    /// Threads stay one level deep: a reply has to point at a top-level
    /// comment on the same article.
    async fn resolve_parent(
        &self,
        parent_id: i64,
        article: &Article,
    ) -> ApplicationResult<Comment> {
        let parent_id = CommentId::new(parent_id)?;
        let parent = self
            .engagement_repo
            .find_comment(parent_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;

        if parent.article_id != article.id {
            return Err(ApplicationError::invalid_target(
                "parent comment belongs to a different article",
            ));
        }
        if parent.is_reply() {
            return Err(ApplicationError::invalid_target(
                "replies may not be nested",
            ));
        }

        Ok(parent)
    }
}

// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleContent, ArticleId, ArticleTitle, ArticleUpdate,
            specifications::CanUpdateArticleSpec,
        },
        publisher::PublisherId,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub publisher_id: Option<i64>,
    pub is_sticky: Option<bool>,
}

impl ArticleCommandService {
    /// Content edits only; the slug stays stable and status changes go
    /// through the lifecycle transition.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let managed = self.managed_publishers_for(actor).await?;
        let update_spec =
            CanUpdateArticleSpec::new(&actor.capabilities, &article, actor.id, &managed);
        if !update_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update article",
            ));
        }

        let mut update = ArticleUpdate::new(id, article.updated_at);

        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        update = self.apply_excerpt(&article, command.excerpt, update);

        if let Some(raw) = command.publisher_id {
            let publisher = self.resolve_publisher_scope(actor, Some(raw)).await?;
            update = update.with_publisher(publisher);
        }

        if let Some(is_sticky) = command.is_sticky {
            if is_sticky != article.is_sticky {
                ensure_capability(actor, "articles", "feature")?;
                update = update.with_is_sticky(is_sticky);
            }
        }

        if update.is_noop() {
            return Ok(article.into());
        }

        update.set_updated_at(self.clock.now());
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    fn apply_excerpt(
        &self,
        article: &Article,
        excerpt: Option<String>,
        mut update: ArticleUpdate,
    ) -> ArticleUpdate {
        match excerpt {
            Some(text) if text.trim().is_empty() => {
                // A cleared excerpt falls back to the derived preview.
                let excerpt = update.content.as_ref().unwrap_or(&article.content).excerpt();
                update = update.with_excerpt(excerpt);
            }
            Some(text) => {
                update = update.with_excerpt(text);
            }
            None => {}
        }
        update
    }

    pub(super) async fn managed_publishers_for(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<PublisherId>> {
        if actor.has_capability("articles", "update:managed")
            || actor.has_capability("articles", "delete:managed")
            || actor.has_capability("articles", "approve")
            || actor.has_capability("articles", "archive")
        {
            Ok(self.publisher_repo.managed_publisher_ids(actor.id).await?)
        } else {
            Ok(Vec::new())
        }
    }
}

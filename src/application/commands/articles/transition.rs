// src/application/commands/articles/transition.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticlePublished, ArticleStatus, ArticleUpdate},
};

pub struct TransitionArticleCommand {
    pub id: i64,
    pub status: ArticleStatus,
}

impl ArticleCommandService {
    /// Single entry point for every status change. Capability and scope
    /// failures surface as invalid transitions alongside matrix
    /// violations; a same-status request is an idempotent no-op and
    /// never notifies again.
    pub async fn transition_article(
        &self,
        actor: &AuthenticatedUser,
        command: TransitionArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let target = command.status;
        if article.status == target {
            return Ok(article.into());
        }
        if !article.status.allows(target) {
            return Err(ApplicationError::invalid_transition(format!(
                "cannot move article from {} to {}",
                article.status, target
            )));
        }
        self.ensure_transition_allowed(actor, &article, target)
            .await?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, article.updated_at).with_status(target);
        match target {
            ArticleStatus::Published => {
                update = update.with_approved_by(actor.id);
                if article.published_at.is_none() {
                    update = update.with_published_at(now);
                }
            }
            ArticleStatus::Rejected => {
                // The reviewer is recorded on rejection too.
                update = update.with_approved_by(actor.id);
            }
            _ => {}
        }
        update.set_updated_at(now);

        let updated = self.write_repo.update(update).await?;

        if target == ArticleStatus::Published {
            let published_at = updated.published_at.unwrap_or(now);
            let event = ArticlePublished::from_article(&updated, published_at);
            self.notifications.dispatch_detached(event);
        }

        Ok(updated.into())
    }

    async fn ensure_transition_allowed(
        &self,
        actor: &AuthenticatedUser,
        article: &Article,
        target: ArticleStatus,
    ) -> ApplicationResult<()> {
        match target {
            ArticleStatus::Submitted => {
                if !actor.has_capability("articles", "submit") {
                    return Err(ApplicationError::invalid_transition(
                        "submitting requires the articles:submit capability",
                    ));
                }
                if !actor.is_admin() && !article.is_authored_by(actor.id) {
                    return Err(ApplicationError::invalid_transition(
                        "only an author may submit an article for review",
                    ));
                }
                Ok(())
            }
            ArticleStatus::Published | ArticleStatus::Rejected => {
                if !actor.has_capability("articles", "approve") {
                    return Err(ApplicationError::invalid_transition(
                        "reviewing requires the articles:approve capability",
                    ));
                }
                self.ensure_review_scope(actor, article).await
            }
            ArticleStatus::Archived => {
                if !actor.has_capability("articles", "archive") {
                    return Err(ApplicationError::invalid_transition(
                        "archiving requires the articles:archive capability",
                    ));
                }
                self.ensure_review_scope(actor, article).await
            }
            ArticleStatus::Draft => Err(ApplicationError::invalid_transition(
                "articles cannot return to draft",
            )),
        }
    }

    async fn ensure_review_scope(
        &self,
        actor: &AuthenticatedUser,
        article: &Article,
    ) -> ApplicationResult<()> {
        if actor.is_admin() {
            return Ok(());
        }
        let managed = self.publisher_repo.managed_publisher_ids(actor.id).await?;
        if article.belongs_to_any(&managed) {
            Ok(())
        } else {
            Err(ApplicationError::invalid_transition(
                "article is outside the publishers you manage",
            ))
        }
    }
}

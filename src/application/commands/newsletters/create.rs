// src/application/commands/newsletters/create.rs
use chrono::{DateTime, Utc};

use super::NewsletterCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, NewsletterDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        newsletter::{Frequency, NewNewsletter},
        publisher::PublisherId,
        user::Role,
    },
};

pub struct CreateNewsletterCommand {
    pub title: String,
    pub content: String,
    pub frequency: String,
    pub publisher_id: Option<i64>,
    pub featured_article_ids: Vec<i64>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl NewsletterCommandService {
    pub async fn create_newsletter(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNewsletterCommand,
    ) -> ApplicationResult<NewsletterDto> {
        ensure_capability(actor, "newsletters", "create")?;

        let frequency: Frequency = command.frequency.parse()?;
        let publisher_id = self
            .resolve_publisher_scope(actor, command.publisher_id)
            .await?;
        let featured = self
            .resolve_featured_articles(&command.featured_article_ids)
            .await?;

        let mut newsletter = NewNewsletter::new(
            command.title,
            command.content,
            frequency,
            publisher_id,
            actor.id,
            self.clock.now(),
        )?
        .with_featured_articles(featured);
        if let Some(at) = command.scheduled_for {
            newsletter = newsletter.with_schedule(at);
        }

        let newsletter = self.newsletter_repo.insert(newsletter).await?;
        Ok(newsletter.into())
    }

    async fn resolve_publisher_scope(
        &self,
        actor: &AuthenticatedUser,
        publisher_id: Option<i64>,
    ) -> ApplicationResult<Option<PublisherId>> {
        let Some(raw) = publisher_id else {
            return Ok(None);
        };
        let id = PublisherId::new(raw)?;
        self.publisher_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;

        if actor.is_admin() {
            return Ok(Some(id));
        }

        let allowed = match actor.role {
            Role::Journalist => self.publisher_repo.affiliated_publisher_ids(actor.id).await?,
            Role::Editor => self.publisher_repo.managed_publisher_ids(actor.id).await?,
            _ => Vec::new(),
        };
        if allowed.contains(&id) {
            Ok(Some(id))
        } else {
            Err(ApplicationError::forbidden(
                "newsletter publisher must be one of your affiliations",
            ))
        }
    }

    async fn resolve_featured_articles(
        &self,
        article_ids: &[i64],
    ) -> ApplicationResult<Vec<ArticleId>> {
        let mut featured = Vec::with_capacity(article_ids.len());
        for raw in article_ids {
            let id = ArticleId::new(*raw)?;
            if featured.contains(&id) {
                continue;
            }
            let article = self
                .article_read_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("featured article not found"))?;
            if !article.status.is_published() {
                return Err(ApplicationError::invalid_target(
                    "featured articles must be published",
                ));
            }
            featured.push(id);
        }
        Ok(featured)
    }
}

// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::application::commands::ensure_capability;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleStatus, ArticleTitle, NewArticle},
        errors::DomainError,
        publisher::PublisherId,
        user::{Role, UserId},
    },
};

const SLUG_INSERT_RETRIES: u32 = 2;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub publisher_id: Option<i64>,
    pub co_author_ids: Vec<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    excerpt: Option<String>,
    publisher_id: Option<i64>,
    co_author_ids: Vec<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn publisher(mut self, publisher_id: i64) -> Self {
        self.publisher_id = Some(publisher_id);
        self
    }

    pub fn co_author(mut self, user_id: i64) -> Self {
        self.co_author_ids.push(user_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            excerpt: self.excerpt,
            publisher_id: self.publisher_id,
            co_author_ids: self.co_author_ids,
        })
    }
}

impl ArticleCommandService {
    /// New articles always start as drafts; publication is a separate
    /// transition with its own gate.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let publisher_id = self
            .resolve_publisher_scope(actor, command.publisher_id)
            .await?;
        let author_ids = self
            .resolve_authors(actor, &command.co_author_ids)
            .await?;

        let excerpt = match command.excerpt {
            Some(text) if !text.trim().is_empty() => text,
            _ => content.excerpt(),
        };
        let reading_time = content.reading_time();
        let now = self.clock.now();

        // The unique index is the final arbiter; a racing insert with the
        // same slug surfaces as a conflict and we re-probe.
        let mut attempts = 0;
        let created = loop {
            let slug = self.slug_service.generate_unique_slug(&title).await?;
            let new_article = NewArticle {
                title: title.clone(),
                slug,
                content: content.clone(),
                excerpt: excerpt.clone(),
                reading_time,
                status: ArticleStatus::Draft,
                is_sticky: false,
                author_ids: author_ids.clone(),
                publisher_id,
                created_at: now,
                updated_at: now,
            };
            match self.write_repo.insert(new_article).await {
                Ok(article) => break article,
                Err(DomainError::Conflict(_)) if attempts < SLUG_INSERT_RETRIES => {
                    attempts += 1;
                }
                Err(other) => return Err(other.into()),
            }
        };

        Ok(created.into())
    }

    pub(super) async fn resolve_publisher_scope(
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
                "article publisher must be one of your affiliations",
            ))
        }
    }

    async fn resolve_authors(
        &self,
        actor: &AuthenticatedUser,
        co_author_ids: &[i64],
    ) -> ApplicationResult<Vec<UserId>> {
        let mut author_ids = vec![actor.id];
        for raw in co_author_ids {
            let id = UserId::new(*raw)?;
            if author_ids.contains(&id) {
                continue;
            }
            let user = self
                .user_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("co-author not found"))?;
            if !matches!(user.role, Role::Journalist | Role::Admin) {
                return Err(ApplicationError::invalid_target(
                    "co-authors must be journalists",
                ));
            }
            author_ids.push(id);
        }
        Ok(author_ids)
    }
}

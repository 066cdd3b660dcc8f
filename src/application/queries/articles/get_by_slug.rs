// src/application/queries/articles/get_by_slug.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Articles outside the actor's visibility read as absent rather than
    /// forbidden, so probing slugs leaks nothing.
    pub async fn get_article_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let visibility = self.resolve_visibility(actor).await?;
        if !visibility.allows(&article) {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(article.into())
    }
}

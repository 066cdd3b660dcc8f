// src/application/commands/engagement/guard.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleId, ArticleReadRepository},
};

/// Comments and likes only attach to published articles; anything else
/// reads as absent.
pub(super) async fn require_published_article(
    repo: &dyn ArticleReadRepository,
    article_id: i64,
) -> ApplicationResult<Article> {
    let id = ArticleId::new(article_id)?;
    let article = repo
        .find_by_id(id)
        .await?
        .filter(|article| article.status.is_published())
        .ok_or_else(|| ApplicationError::not_found("article not found"))?;
    Ok(article)
}

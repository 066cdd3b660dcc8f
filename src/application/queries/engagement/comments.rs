// src/application/queries/engagement/comments.rs
use super::EngagementQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl EngagementQueryService {
    /// Approved comments of a published article, threaded one level.
    pub async fn list_comments(&self, article_id: i64) -> ApplicationResult<Vec<CommentDto>> {
        let id = ArticleId::new(article_id)?;
        let article = self
            .article_read_repo
            .find_by_id(id)
            .await?
            .filter(|article| article.status.is_published())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments = self.engagement_repo.list_comments(article.id).await?;
        Ok(CommentDto::thread(comments))
    }
}

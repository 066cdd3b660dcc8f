// src/domain/engagement/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::engagement::entity::{Comment, CommentId, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait EngagementRepository: Send + Sync {
    async fn insert_comment(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    /// Approved comments of an article, oldest first, replies included.
    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;

    async fn comment_count(&self, article_id: ArticleId) -> DomainResult<u64>;

    /// Returns false when the like already existed.
    async fn insert_like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool>;

    /// Returns false when there was nothing to remove.
    async fn delete_like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool>;

    async fn like_count(&self, article_id: ArticleId) -> DomainResult<u64>;

    /// Unique per (user, article); a repeated read refreshes `read_at`.
    async fn upsert_reading(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        read_at: DateTime<Utc>,
    ) -> DomainResult<()>;
}

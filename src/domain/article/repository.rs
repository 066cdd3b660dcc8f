// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleListCursor, ArticleSlug};
use crate::domain::article::visibility::ArticleVisibility;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Engagement scoring knobs for the trending listing; values come from
/// configuration, not from the domain.
#[derive(Debug, Clone, Copy)]
pub struct TrendingWindow {
    pub like_weight: i64,
    pub comment_weight: i64,
    pub window_days: i64,
}

impl Default for TrendingWindow {
    fn default() -> Self {
        Self {
            like_weight: 1,
            comment_weight: 2,
            window_days: 7,
        }
    }
}

/// Which submitted articles an approval-queue read may return.
#[derive(Debug, Clone)]
pub enum QueueScope {
    All,
    Managed(Vec<PublisherId>),
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn record_view(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    /// Keyset page ordered `(is_sticky, created_at, id) DESC`; returns the
    /// cursor of the next page when more rows exist.
    async fn list_page(
        &self,
        visibility: &ArticleVisibility,
        limit: u32,
        cursor: Option<ArticleListCursor>,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)>;

    /// Published articles of the trailing window ranked by weighted
    /// engagement, best first.
    async fn list_trending(
        &self,
        visibility: &ArticleVisibility,
        limit: u32,
        window: TrendingWindow,
    ) -> DomainResult<Vec<Article>>;

    async fn list_queue(&self, scope: &QueueScope) -> DomainResult<Vec<Article>>;

    async fn list_published_by_publisher(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<Article>>;

    async fn list_published_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;

    async fn count_published_by_author(&self, author_id: UserId) -> DomainResult<u64>;
}

// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: String,
    pub reading_time: i32,
    pub status: ArticleStatus,
    pub is_sticky: bool,
    pub view_count: i64,
    pub author_ids: Vec<UserId>,
    pub publisher_id: Option<PublisherId>,
    pub approved_by: Option<UserId>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_ids.contains(&user_id)
    }

    pub fn belongs_to_any(&self, publishers: &[PublisherId]) -> bool {
        self.publisher_id
            .is_some_and(|id| publishers.contains(&id))
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: String,
    pub reading_time: i32,
    pub status: ArticleStatus,
    pub is_sticky: bool,
    pub author_ids: Vec<UserId>,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied with an optimistic-concurrency guard:
/// the write only lands if the row still carries `original_updated_at`.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub excerpt: Option<String>,
    pub reading_time: Option<i32>,
    pub status: Option<ArticleStatus>,
    pub is_sticky: Option<bool>,
    pub publisher_id: Option<Option<PublisherId>>,
    pub approved_by: Option<UserId>,
    pub published_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            excerpt: None,
            reading_time: None,
            status: None,
            is_sticky: None,
            publisher_id: None,
            approved_by: None,
            published_at: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.excerpt = Some(content.excerpt());
        self.reading_time = Some(content.reading_time());
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: String) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_is_sticky(mut self, is_sticky: bool) -> Self {
        self.is_sticky = Some(is_sticky);
        self
    }

    pub fn with_publisher(mut self, publisher_id: Option<PublisherId>) -> Self {
        self.publisher_id = Some(publisher_id);
        self
    }

    pub fn with_approved_by(mut self, approved_by: UserId) -> Self {
        self.approved_by = Some(approved_by);
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.status.is_none()
            && self.is_sticky.is_none()
            && self.publisher_id.is_none()
            && self.approved_by.is_none()
            && self.published_at.is_none()
    }
}

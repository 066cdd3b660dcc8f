// src/domain/article/events.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Snapshot handed to the notification dispatcher when an article
/// actually enters the published state.
#[derive(Debug, Clone)]
pub struct ArticlePublished {
    pub id: ArticleId,
    pub title: String,
    pub slug: String,
    pub publisher_id: Option<PublisherId>,
    pub author_ids: Vec<UserId>,
    pub published_at: DateTime<Utc>,
}

impl ArticlePublished {
    pub fn from_article(article: &Article, published_at: DateTime<Utc>) -> Self {
        Self {
            id: article.id,
            title: article.title.as_str().to_owned(),
            slug: article.slug.as_str().to_owned(),
            publisher_id: article.publisher_id,
            author_ids: article.author_ids.clone(),
            published_at,
        }
    }
}

// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub status: ArticleStatus,
    pub reading_time: i32,
    pub is_sticky: bool,
    pub view_count: i64,
    pub author_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            content: article.content.into(),
            excerpt: article.excerpt,
            status: article.status,
            reading_time: article.reading_time,
            is_sticky: article.is_sticky,
            view_count: article.view_count,
            author_ids: article.author_ids.into_iter().map(Into::into).collect(),
            publisher_id: article.publisher_id.map(Into::into),
            approved_by: article.approved_by.map(Into::into),
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

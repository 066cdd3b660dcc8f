// src/application/dto/newsletters.rs
use crate::domain::newsletter::{Frequency, Newsletter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsletterDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<i64>,
    pub created_by: i64,
    pub featured_article_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Newsletter> for NewsletterDto {
    fn from(newsletter: Newsletter) -> Self {
        Self {
            id: newsletter.id.into(),
            title: newsletter.title,
            content: newsletter.content,
            frequency: newsletter.frequency,
            publisher_id: newsletter.publisher_id.map(Into::into),
            created_by: newsletter.created_by.into(),
            featured_article_ids: newsletter
                .featured_article_ids
                .into_iter()
                .map(Into::into)
                .collect(),
            scheduled_for: newsletter.scheduled_for,
            sent_at: newsletter.sent_at,
            created_at: newsletter.created_at,
        }
    }
}

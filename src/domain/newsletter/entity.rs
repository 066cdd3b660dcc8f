// src/domain/newsletter/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsletterId(pub i64);

impl NewsletterId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "newsletter id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NewsletterId> for i64 {
    fn from(value: NewsletterId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Special,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Special => "special",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "special" => Ok(Frequency::Special),
            other => Err(DomainError::Validation(format!(
                "unknown newsletter frequency '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub title: String,
    pub content: String,
    pub frequency: Frequency,
    pub publisher_id: Option<PublisherId>,
    pub created_by: UserId,
    pub featured_article_ids: Vec<ArticleId>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub title: String,
    pub content: String,
    pub frequency: Frequency,
    pub publisher_id: Option<PublisherId>,
    pub created_by: UserId,
    pub featured_article_ids: Vec<ArticleId>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NewNewsletter {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        frequency: Frequency,
        publisher_id: Option<PublisherId>,
        created_by: UserId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = title.into();
        let content = content.into();
        if title.trim().len() < 5 {
            return Err(DomainError::Validation(
                "newsletter title must be at least 5 characters long".into(),
            ));
        }
        if content.trim().len() < 50 {
            return Err(DomainError::Validation(
                "newsletter content must be at least 50 characters long".into(),
            ));
        }
        Ok(Self {
            title,
            content,
            frequency,
            publisher_id,
            created_by,
            featured_article_ids: Vec::new(),
            scheduled_for: None,
            created_at,
        })
    }

    pub fn with_featured_articles(mut self, ids: Vec<ArticleId>) -> Self {
        self.featured_article_ids = ids;
        self
    }

    pub fn with_schedule(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_for = Some(at);
        self
    }
}

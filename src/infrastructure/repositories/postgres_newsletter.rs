// src/infrastructure/repositories/postgres_newsletter.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{
    Frequency, NewNewsletter, Newsletter, NewsletterId, NewsletterRepository,
};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const NEWSLETTER_COLUMNS: &str = "n.id, n.title, n.content, n.frequency, n.publisher_id, \
     n.created_by, n.scheduled_for, n.sent_at, n.created_at, \
     COALESCE((SELECT array_agg(nf.article_id ORDER BY nf.position) \
               FROM newsletter_featured_articles nf WHERE nf.newsletter_id = n.id), '{}') \
         AS featured_article_ids";

#[derive(Clone)]
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsletterRow {
    id: i64,
    title: String,
    content: String,
    frequency: String,
    publisher_id: Option<i64>,
    created_by: i64,
    scheduled_for: Option<DateTime<Utc>>,
    sent_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    featured_article_ids: Vec<i64>,
}

impl TryFrom<NewsletterRow> for Newsletter {
    type Error = DomainError;

    fn try_from(row: NewsletterRow) -> Result<Self, Self::Error> {
        Ok(Newsletter {
            id: NewsletterId::new(row.id)?,
            title: row.title,
            content: row.content,
            frequency: row.frequency.parse::<Frequency>()?,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            created_by: UserId::new(row.created_by)?,
            featured_article_ids: row
                .featured_article_ids
                .into_iter()
                .map(ArticleId::new)
                .collect::<Result<Vec<_>, _>>()?,
            scheduled_for: row.scheduled_for,
            sent_at: row.sent_at,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let NewNewsletter {
            title,
            content,
            frequency,
            publisher_id,
            created_by,
            featured_article_ids,
            scheduled_for,
            created_at,
        } = newsletter;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO newsletters \
                (title, content, frequency, publisher_id, created_by, scheduled_for, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(&title)
        .bind(&content)
        .bind(frequency.as_str())
        .bind(publisher_id.map(i64::from))
        .bind(i64::from(created_by))
        .bind(scheduled_for)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for (position, article_id) in featured_article_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO newsletter_featured_articles (newsletter_id, article_id, position) \
                 VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(i64::from(*article_id))
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        Ok(Newsletter {
            id: NewsletterId::new(id)?,
            title,
            content,
            frequency,
            publisher_id,
            created_by,
            featured_article_ids,
            scheduled_for,
            sent_at: None,
            created_at,
        })
    }

    async fn list_by_publisher(&self, publisher_id: PublisherId) -> DomainResult<Vec<Newsletter>> {
        let sql = format!(
            "SELECT {NEWSLETTER_COLUMNS} FROM newsletters n \
             WHERE n.publisher_id = $1 ORDER BY n.created_at DESC, n.id DESC"
        );
        let rows = sqlx::query_as::<_, NewsletterRow>(&sql)
            .bind(i64::from(publisher_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Newsletter::try_from).collect()
    }

    async fn list_by_creator(&self, creator_id: UserId) -> DomainResult<Vec<Newsletter>> {
        let sql = format!(
            "SELECT {NEWSLETTER_COLUMNS} FROM newsletters n \
             WHERE n.created_by = $1 ORDER BY n.created_at DESC, n.id DESC"
        );
        let rows = sqlx::query_as::<_, NewsletterRow>(&sql)
            .bind(i64::from(creator_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Newsletter::try_from).collect()
    }
}

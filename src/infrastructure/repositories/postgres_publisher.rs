// src/infrastructure/repositories/postgres_publisher.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::{
    AffiliationKind, NewPublisher, Publisher, PublisherDescription, PublisherId, PublisherName,
    PublisherRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const PUBLISHER_COLUMNS: &str = "id, name, description, website, is_active, created_at";

#[derive(Clone)]
pub struct PostgresPublisherRepository {
    pool: PgPool,
}

impl PostgresPublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    description: String,
    website: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<PublisherRow> for Publisher {
    type Error = DomainError;

    fn try_from(row: PublisherRow) -> Result<Self, Self::Error> {
        Ok(Publisher {
            id: PublisherId::new(row.id)?,
            name: PublisherName::new(row.name)?,
            description: PublisherDescription::new(row.description)?,
            website: row.website,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl PublisherRepository for PostgresPublisherRepository {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let NewPublisher {
            name,
            description,
            website,
            is_active,
            created_at,
        } = publisher;

        let sql = format!(
            "INSERT INTO publishers (name, description, website, is_active, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {PUBLISHER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PublisherRow>(&sql)
            .bind(name.as_str())
            .bind(description.as_str())
            .bind(website)
            .bind(is_active)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Publisher::try_from(row)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let sql = format!("SELECT {PUBLISHER_COLUMNS} FROM publishers WHERE id = $1");
        let row = sqlx::query_as::<_, PublisherRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Publisher::try_from).transpose()
    }

    async fn list_active(&self) -> DomainResult<Vec<Publisher>> {
        let sql =
            format!("SELECT {PUBLISHER_COLUMNS} FROM publishers WHERE is_active ORDER BY name");
        let rows = sqlx::query_as::<_, PublisherRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Publisher::try_from).collect()
    }

    async fn add_affiliation(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        kind: AffiliationKind,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO publisher_affiliations (publisher_id, user_id, kind) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (publisher_id, user_id, kind) DO NOTHING",
        )
        .bind(i64::from(publisher_id))
        .bind(i64::from(user_id))
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn managed_publisher_ids(&self, user_id: UserId) -> DomainResult<Vec<PublisherId>> {
        self.publisher_ids_by_kind(user_id, AffiliationKind::Editor)
            .await
    }

    async fn affiliated_publisher_ids(&self, user_id: UserId) -> DomainResult<Vec<PublisherId>> {
        self.publisher_ids_by_kind(user_id, AffiliationKind::Journalist)
            .await
    }
}

impl PostgresPublisherRepository {
    async fn publisher_ids_by_kind(
        &self,
        user_id: UserId,
        kind: AffiliationKind,
    ) -> DomainResult<Vec<PublisherId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT publisher_id FROM publisher_affiliations \
             WHERE user_id = $1 AND kind = $2 ORDER BY publisher_id",
        )
        .bind(i64::from(user_id))
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(PublisherId::new).collect()
    }
}

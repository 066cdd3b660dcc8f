// src/infrastructure/repositories/postgres_subscription.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::{SubscriptionRepository, Subscriptions};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn subscribe_publisher(
        &self,
        reader_id: UserId,
        publisher_id: PublisherId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO publisher_subscriptions (reader_id, publisher_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(reader_id))
        .bind(i64::from(publisher_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn unsubscribe_publisher(
        &self,
        reader_id: UserId,
        publisher_id: PublisherId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "DELETE FROM publisher_subscriptions WHERE reader_id = $1 AND publisher_id = $2",
        )
        .bind(i64::from(reader_id))
        .bind(i64::from(publisher_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn subscribe_journalist(
        &self,
        reader_id: UserId,
        journalist_id: UserId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO journalist_subscriptions (reader_id, journalist_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(reader_id))
        .bind(i64::from(journalist_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn unsubscribe_journalist(
        &self,
        reader_id: UserId,
        journalist_id: UserId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "DELETE FROM journalist_subscriptions WHERE reader_id = $1 AND journalist_id = $2",
        )
        .bind(i64::from(reader_id))
        .bind(i64::from(journalist_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn subscriptions_for(&self, reader_id: UserId) -> DomainResult<Subscriptions> {
        let publisher_ids = sqlx::query_scalar::<_, i64>(
            "SELECT publisher_id FROM publisher_subscriptions \
             WHERE reader_id = $1 ORDER BY publisher_id",
        )
        .bind(i64::from(reader_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let journalist_ids = sqlx::query_scalar::<_, i64>(
            "SELECT journalist_id FROM journalist_subscriptions \
             WHERE reader_id = $1 ORDER BY journalist_id",
        )
        .bind(i64::from(reader_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Subscriptions {
            publisher_ids: publisher_ids
                .into_iter()
                .map(PublisherId::new)
                .collect::<Result<Vec<_>, _>>()?,
            journalist_ids: journalist_ids
                .into_iter()
                .map(UserId::new)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    async fn publisher_subscriber_ids(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT reader_id FROM publisher_subscriptions WHERE publisher_id = $1",
        )
        .bind(i64::from(publisher_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }

    async fn journalist_follower_ids(&self, journalist_id: UserId) -> DomainResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT reader_id FROM journalist_subscriptions WHERE journalist_id = $1",
        )
        .bind(i64::from(journalist_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }

    async fn publisher_subscriber_count(&self, publisher_id: PublisherId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM publisher_subscriptions WHERE publisher_id = $1",
        )
        .bind(i64::from(publisher_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }

    async fn journalist_follower_count(&self, journalist_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM journalist_subscriptions WHERE journalist_id = $1",
        )
        .bind(i64::from(journalist_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }
}

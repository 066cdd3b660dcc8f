// src/infrastructure/repositories/postgres_engagement.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::engagement::{Comment, CommentId, EngagementRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresEngagementRepository {
    pool: PgPool,
}

impl PostgresEngagementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    author_username: String,
    parent_id: Option<i64>,
    content: String,
    is_approved: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            author_username: row.author_username,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            content: row.content,
            is_approved: row.is_approved,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl EngagementRepository for PostgresEngagementRepository {
    async fn insert_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author_id,
            parent_id,
            content,
            is_approved,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "WITH inserted AS ( \
                 INSERT INTO comments (article_id, author_id, parent_id, content, is_approved, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING id, article_id, author_id, parent_id, content, is_approved, created_at \
             ) \
             SELECT i.id, i.article_id, i.author_id, u.username AS author_username, \
                    i.parent_id, i.content, i.is_approved, i.created_at \
             FROM inserted i JOIN users u ON u.id = i.author_id",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(author_id))
        .bind(parent_id.map(i64::from))
        .bind(&content)
        .bind(is_approved)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, c.article_id, c.author_id, u.username AS author_username, \
                    c.parent_id, c.content, c.is_approved, c.created_at \
             FROM comments c JOIN users u ON u.id = c.author_id \
             WHERE c.id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, c.article_id, c.author_id, u.username AS author_username, \
                    c.parent_id, c.content, c.is_approved, c.created_at \
             FROM comments c JOIN users u ON u.id = c.author_id \
             WHERE c.article_id = $1 AND c.is_approved \
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn comment_count(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE article_id = $1 AND is_approved",
        )
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }

    async fn insert_like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO article_likes (article_id, user_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let result =
            sqlx::query("DELETE FROM article_likes WHERE article_id = $1 AND user_id = $2")
                .bind(i64::from(article_id))
                .bind(i64::from(user_id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn like_count(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM article_likes WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn upsert_reading(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        read_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO reading_history (user_id, article_id, read_at) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, article_id) DO UPDATE SET read_at = EXCLUDED.read_at",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .bind(read_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}

// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListCursor, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleTitle, ArticleUpdate, ArticleVisibility, ArticleWriteRepository,
    NewArticle, QueueScope, TrendingWindow,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "a.id, a.title, a.slug, a.content, a.excerpt, a.reading_time, \
     a.status, a.is_sticky, a.view_count, a.publisher_id, a.approved_by, a.published_at, \
     a.created_at, a.updated_at, \
     COALESCE((SELECT array_agg(aa.user_id ORDER BY aa.position) \
               FROM article_authors aa WHERE aa.article_id = a.id), '{}') AS author_ids";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    reading_time: i32,
    status: String,
    is_sticky: bool,
    view_count: i64,
    publisher_id: Option<i64>,
    approved_by: Option<i64>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_ids: Vec<i64>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
            excerpt: row.excerpt,
            reading_time: row.reading_time,
            status: row.status.parse::<ArticleStatus>()?,
            is_sticky: row.is_sticky,
            view_count: row.view_count,
            author_ids: row
                .author_ids
                .into_iter()
                .map(UserId::new)
                .collect::<Result<Vec<_>, _>>()?,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            approved_by: row.approved_by.map(UserId::new).transpose()?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn fetch_by_id(pool: &PgPool, id: i64) -> DomainResult<Option<Article>> {
    let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1");
    let row = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;

    row.map(Article::try_from).transpose()
}

fn push_where(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    if *has_where {
        builder.push(" AND ");
    } else {
        builder.push(" WHERE ");
        *has_where = true;
    }
}

fn apply_visibility(
    builder: &mut QueryBuilder<'_, Postgres>,
    visibility: &ArticleVisibility,
    has_where: &mut bool,
) {
    match visibility {
        ArticleVisibility::PublishedOnly => {
            push_where(builder, has_where);
            builder.push("a.status = 'published'");
        }
        ArticleVisibility::SubscriptionFeed {
            publishers,
            journalists,
        } => {
            let publisher_ids: Vec<i64> = publishers.iter().copied().map(i64::from).collect();
            let journalist_ids: Vec<i64> = journalists.iter().copied().map(i64::from).collect();
            push_where(builder, has_where);
            builder.push("a.status = 'published' AND (a.publisher_id = ANY(");
            builder.push_bind(publisher_ids);
            builder.push(") OR EXISTS (SELECT 1 FROM article_authors aa \
                 WHERE aa.article_id = a.id AND aa.user_id = ANY(");
            builder.push_bind(journalist_ids);
            builder.push(")))");
        }
        ArticleVisibility::AuthoredOrPublished { author } => {
            push_where(builder, has_where);
            builder.push("(a.status = 'published' OR EXISTS (SELECT 1 FROM article_authors aa \
                 WHERE aa.article_id = a.id AND aa.user_id = ");
            builder.push_bind(i64::from(*author));
            builder.push("))");
        }
        ArticleVisibility::ManagedOrPublished { publishers } => {
            let publisher_ids: Vec<i64> = publishers.iter().copied().map(i64::from).collect();
            push_where(builder, has_where);
            builder.push("(a.status = 'published' OR a.publisher_id = ANY(");
            builder.push_bind(publisher_ids);
            builder.push("))");
        }
        ArticleVisibility::Unrestricted => {}
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            excerpt,
            reading_time,
            status,
            is_sticky,
            author_ids,
            publisher_id,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles \
                (title, slug, content, excerpt, reading_time, status, is_sticky, publisher_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(&excerpt)
        .bind(reading_time)
        .bind(status.as_str())
        .bind(is_sticky)
        .bind(publisher_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for (position, author_id) in author_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO article_authors (article_id, user_id, position) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(i64::from(*author_id))
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        Ok(Article {
            id: ArticleId::new(id)?,
            title,
            slug,
            content,
            excerpt,
            reading_time,
            status,
            is_sticky,
            view_count: 0,
            author_ids,
            publisher_id,
            approved_by: None,
            published_at: None,
            created_at,
            updated_at,
        })
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            excerpt,
            reading_time,
            status,
            is_sticky,
            publisher_id,
            approved_by,
            published_at,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(reading_time) = reading_time {
            builder.push(", reading_time = ");
            builder.push_bind(reading_time);
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(is_sticky) = is_sticky {
            builder.push(", is_sticky = ");
            builder.push_bind(is_sticky);
        }
        if let Some(publisher_id) = publisher_id {
            builder.push(", publisher_id = ");
            builder.push_bind(publisher_id.map(i64::from));
        }
        if let Some(approved_by) = approved_by {
            builder.push(", approved_by = ");
            builder.push_bind(i64::from(approved_by));
        }
        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING id");

        let updated: Option<i64> = builder
            .build_query_scalar()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let updated =
            updated.ok_or_else(|| DomainError::Conflict("article was modified concurrently".into()))?;

        fetch_by_id(&self.pool, updated)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn record_view(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET view_count = view_count + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_by_id(&self.pool, i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        visibility: &ArticleVisibility,
        limit: u32,
        cursor: Option<ArticleListCursor>,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = (limit as i64) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        let mut has_where = false;
        apply_visibility(&mut builder, visibility, &mut has_where);

        if let Some(term) = search {
            let pattern = format!("%{term}%");
            push_where(&mut builder, &mut has_where);
            builder.push("(a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(cursor) = cursor {
            push_where(&mut builder, &mut has_where);
            builder.push("(a.is_sticky, a.created_at, a.id) < (");
            builder.push_bind(cursor.is_sticky);
            builder.push(", ");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }

        builder.push(" ORDER BY a.is_sticky DESC, a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if articles.len() > limit as usize {
            articles.pop();
            if let Some(last) = articles.last() {
                next_cursor = Some(ArticleListCursor::new(
                    last.is_sticky,
                    last.created_at,
                    i64::from(last.id),
                ));
            }
        }

        Ok((articles, next_cursor))
    }

    async fn list_trending(
        &self,
        visibility: &ArticleVisibility,
        limit: u32,
        window: TrendingWindow,
    ) -> DomainResult<Vec<Article>> {
        let since = Utc::now() - Duration::days(window.window_days.max(1));
        let limit = limit.clamp(1, 100) as i64;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS}, "));
        builder.push("(SELECT COUNT(*) FROM article_likes al \
             WHERE al.article_id = a.id AND al.created_at >= ");
        builder.push_bind(since);
        builder.push(") * ");
        builder.push_bind(window.like_weight);
        builder.push(" + (SELECT COUNT(*) FROM comments c \
             WHERE c.article_id = a.id AND c.is_approved AND c.created_at >= ");
        builder.push_bind(since);
        builder.push(") * ");
        builder.push_bind(window.comment_weight);
        builder.push(" AS score FROM articles a WHERE a.status = 'published'");

        let mut has_where = true;
        match visibility {
            // Both collapse to the status filter already in place.
            ArticleVisibility::PublishedOnly | ArticleVisibility::Unrestricted => {}
            other => apply_visibility(&mut builder, other, &mut has_where),
        }

        builder.push(" ORDER BY score DESC, a.published_at DESC NULLS LAST, a.id DESC LIMIT ");
        builder.push_bind(limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_queue(&self, scope: &QueueScope) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.status = 'submitted'"
        ));

        if let QueueScope::Managed(publishers) = scope {
            let publisher_ids: Vec<i64> = publishers.iter().copied().map(i64::from).collect();
            builder.push(" AND a.publisher_id = ANY(");
            builder.push_bind(publisher_ids);
            builder.push(")");
        }

        builder.push(" ORDER BY a.created_at DESC, a.id DESC");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_published_by_publisher(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a \
             WHERE a.status = 'published' AND a.publisher_id = $1 \
             ORDER BY a.published_at DESC, a.id DESC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(publisher_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_published_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a \
             WHERE a.status = 'published' AND EXISTS (SELECT 1 FROM article_authors aa \
                 WHERE aa.article_id = a.id AND aa.user_id = $1) \
             ORDER BY a.published_at DESC, a.id DESC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(author_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count_published_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM articles a \
             WHERE a.status = 'published' AND EXISTS (SELECT 1 FROM article_authors aa \
                 WHERE aa.article_id = a.id AND aa.user_id = $1)",
        )
        .bind(i64::from(author_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }
}
